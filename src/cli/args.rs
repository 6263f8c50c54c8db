/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::api::DEFAULT_ENDPOINT;

/// oc-export — list and export Open Collective backers.
#[derive(Debug, Parser)]
#[command(
    name = "oc-export",
    about = "List Open Collective backers and export them to per-tier CSV files",
    version,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output format. Auto-detects: table when TTY, json when piped.
    #[arg(long, global = true, value_name = "FORMAT", default_value = "auto")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, global = true, conflicts_with = "output")]
    pub json: bool,

    /// Omit table headers.
    #[arg(long, global = true)]
    pub no_header: bool,

    /// Log requests and print full error chains to stderr.
    #[arg(long, global = true)]
    pub debug: bool,

    /// Open Collective GraphQL endpoint.
    #[arg(
        long,
        global = true,
        value_name = "URL",
        env = "OPENCOLLECTIVE_ENDPOINT",
        default_value = DEFAULT_ENDPOINT
    )]
    pub endpoint: String,

    /// Personal token to use instead of the one stored in the keyring.
    #[arg(
        long = "api-token",
        global = true,
        value_name = "TOKEN",
        env = "OPENCOLLECTIVE_TOKEN",
        hide_env_values = true
    )]
    pub api_token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Auto-detect: table when stdout is a TTY, json when piped.
    #[default]
    Auto,
    /// JSON array or object (pretty-printed).
    Json,
    /// Compact single-line JSON.
    Compact,
    /// Newline-delimited JSON (one object per line).
    Ndjson,
    /// Aligned table with headers (human-readable).
    Table,
    /// Names only, one per line.
    Plain,
}

/// All subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List current backers (recurring contributors) of an organization.
    ListBackers(ListBackersArgs),
    /// List the tiers an organization defines.
    ListTiers(ListTiersArgs),
    /// Export backer names and email addresses to one CSV file per tier.
    Export(ExportArgs),
    /// Store your Open Collective personal token in the system keyring.
    SetToken(SetTokenArgs),
}

/// Arguments for `oc-export list-backers`.
#[derive(Debug, Parser)]
pub struct ListBackersArgs {
    /// Organization slug (e.g. "getsolus").
    pub org: String,

    /// Only list backers of this tier (exact, case-sensitive).
    #[arg(long, value_name = "TIER")]
    pub tier: Option<String>,
}

/// Arguments for `oc-export list-tiers`.
#[derive(Debug, Parser)]
pub struct ListTiersArgs {
    /// Organization slug.
    pub org: String,
}

/// Arguments for `oc-export export`.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Organization slug.
    pub org: String,

    /// Tier to export; repeat for several. Defaults to every tier.
    #[arg(long = "tier", value_name = "TIER")]
    pub tiers: Vec<String>,

    /// Base filename; each tier is written to `{stem}-{tier}.csv` beside it.
    /// Defaults to `./backers_MM-DD-YYYY.csv` for today's date.
    #[arg(long, value_name = "PATH")]
    pub base_filename: Option<PathBuf>,
}

/// Arguments for `oc-export set-token`.
#[derive(Debug, Parser)]
pub struct SetTokenArgs {
    /// Personal token. Prompted for when omitted, which keeps it out of shell history.
    #[arg(long, value_name = "TOKEN")]
    pub token: Option<String>,
}
