#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! oc-export — list Open Collective backers and export them to per-tier CSV files.

mod api;
mod backers;
mod cli;
mod commands;
mod config;
mod credentials;
mod logging;
mod types;

use std::error::Error as _;

use clap::Parser;

use backers::AppError;
use cli::{Cli, OutputCtx, write_error};
use config::Config;
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let config = Config::from_cli(&cli);
    let ctx = OutputCtx::new(cli.output, cli.json, cli.no_header, cli.debug);

    match commands::dispatch(&cli.command, &config, &ctx) {
        Ok(()) => {}
        Err(err) if err.is_clean_exit() => {
            ctx.status(&format!("{err}."));
        }
        Err(err) => {
            write_error(&ErrorOutput::from_app_error(&err), ctx.format);
            if config.debug {
                report_debug(&err);
            }
            std::process::exit(err.exit_code());
        }
    }
}

fn report_debug(err: &AppError) {
    eprintln!("--debug specified; original error:");
    eprintln!("{err:#?}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
}
