/// Output formatting: JSON, table, plain modes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde::Serialize;

use super::args::OutputFormat;
use crate::types::{BackerOutput, ErrorOutput, ExportOutput};

/// Resolve the effective output format, handling `--json` flag and TTY auto-detection.
#[must_use]
pub fn resolve_format(fmt: OutputFormat, json_flag: bool) -> OutputFormat {
    if json_flag {
        return OutputFormat::Json;
    }
    if fmt == OutputFormat::Auto {
        if std::io::stdout().is_terminal() {
            OutputFormat::Table
        } else {
            OutputFormat::Json
        }
    } else {
        fmt
    }
}

/// Output context passed to all formatters.
pub struct OutputCtx {
    pub format: OutputFormat,
    pub no_header: bool,
    /// When true, log timing spans and backer records.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(fmt: OutputFormat, json_flag: bool, no_header: bool, debug: bool) -> Self {
        Self {
            format: resolve_format(fmt, json_flag),
            no_header,
            debug,
        }
    }

    /// Start a named debug timer. Logs elapsed time on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }

    /// Whether stdout carries machine-readable data.
    #[must_use]
    pub fn is_machine(&self) -> bool {
        matches!(
            self.format,
            OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson
        )
    }

    /// Print a human status line: stdout for people, stderr when stdout is data.
    pub fn status(&self, message: &str) {
        if self.is_machine() || self.format == OutputFormat::Plain {
            eprintln!("{message}");
        } else {
            println!("{message}");
        }
    }

    /// Print a warning to stderr.
    pub fn warn(&self, message: &str) {
        eprintln!("Warning: {message}");
    }
}

// --- Backers ---

/// Write a list of backers to stdout.
pub fn write_backers(backers: &[BackerOutput], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(backers),
        OutputFormat::Compact => print_compact_json(backers),
        OutputFormat::Ndjson => print_ndjson(backers),
        OutputFormat::Plain => {
            for b in backers {
                println!("{}", b.name);
            }
        }
        OutputFormat::Table | OutputFormat::Auto => write_backers_table(backers, ctx),
    }
}

fn write_backers_table(backers: &[BackerOutput], ctx: &OutputCtx) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    if !ctx.no_header {
        table.set_header(["NAME", "TIER", "EMAIL"]);
    }
    for b in backers {
        table.add_row([
            b.name.as_str(),
            b.tier.as_str(),
            b.email.as_deref().unwrap_or(""),
        ]);
    }
    println!("{table}");
}

// --- Tiers ---

/// Write tier names to stdout.
pub fn write_tiers(tiers: &[String], ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(tiers),
        OutputFormat::Compact => print_compact_json(tiers),
        OutputFormat::Ndjson => print_ndjson(tiers),
        OutputFormat::Plain => {
            for t in tiers {
                println!("{t}");
            }
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let mut table = Table::new();
            table.load_preset(UTF8_BORDERS_ONLY);
            if !ctx.no_header {
                table.set_header(["TIER"]);
            }
            for t in tiers {
                table.add_row([t.as_str()]);
            }
            println!("{table}");
        }
    }
}

// --- Export ---

/// Write one tier's export result.
pub fn write_export_report(report: &ExportOutput, ctx: &OutputCtx) {
    match ctx.format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Compact | OutputFormat::Ndjson => print_compact_json(report),
        OutputFormat::Plain | OutputFormat::Table | OutputFormat::Auto => {
            println!(
                "Successfully exported {} backers to {}.",
                report.exported, report.path
            );
            if !report.skipped.is_empty() {
                println!(
                    "The following {} backers were skipped; they lack email addresses:",
                    report.skipped.len()
                );
                for name in &report.skipped {
                    println!("{name}");
                }
            }
        }
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match format {
        OutputFormat::Json | OutputFormat::Compact | OutputFormat::Ndjson => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        _ => {
            let _ = writeln!(out, "Error: {}", err.error.message);
            if let Some(hint) = &err.error.hint {
                let _ = writeln!(out, "  {hint}");
            }
        }
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            tracing::debug!(label = self.label, "{ms:.2}ms");
        }
    }
}

// --- Generic JSON helpers ---

fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_compact_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn print_ndjson<T: Serialize>(values: &[T]) {
    for v in values {
        match serde_json::to_string(v) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("JSON serialization error: {e}"),
        }
    }
}
