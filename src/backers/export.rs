/// Per-tier CSV export of backer names and email addresses.
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};

use super::errors::AppError;
use super::filter::filter_by_tier;
use super::Backer;

/// Outcome of exporting one tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierReport {
    /// Tier name as requested.
    pub tier: String,
    /// File that was written.
    pub path: PathBuf,
    /// Number of rows written.
    pub exported: usize,
    /// Names of tier members left out because they have no email address.
    pub skipped: Vec<String>,
}

/// Base filename used when none is given: `./backers_MM-DD-YYYY.csv`.
#[must_use]
pub fn default_base_filename(today: NaiveDate) -> PathBuf {
    Path::new(".").join(format!("backers_{}.csv", today.format("%m-%d-%Y")))
}

/// Output path for one tier: `{parent}/{stem}-{tier_slug}.csv`.
///
/// The tier slug is the tier name with spaces replaced by underscores.
#[must_use]
pub fn derive_path(base: &Path, tier: &str) -> PathBuf {
    let stem = base.file_stem().unwrap_or_default().to_string_lossy();
    let parent = base.parent().unwrap_or_else(|| Path::new(""));
    parent.join(format!("{stem}-{}.csv", tier.replace(' ', "_")))
}

fn line_terminator() -> Terminator {
    if cfg!(windows) {
        Terminator::CRLF
    } else {
        Terminator::Any(b'\n')
    }
}

/// Write `backers` to `path` as headerless `name,email` rows.
///
/// Backers without an email are not written; their names are returned.
/// Rows are sorted by the exported (most recent) email address.
fn write_tier(backers: &[Backer], path: &Path) -> Result<(usize, Vec<String>), AppError> {
    let (exportable, skipped): (Vec<&Backer>, Vec<&Backer>) =
        backers.iter().partition(|b| !b.emails.is_empty());

    let mut rows: Vec<(&str, &str)> = exportable
        .iter()
        .filter_map(|b| b.preferred_email().map(|email| (b.name.as_str(), email)))
        .collect();
    rows.sort_by(|a, b| a.1.cmp(b.1));

    let csv_err = |source: csv::Error| AppError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(line_terminator())
        .from_path(path)
        .map_err(csv_err)?;
    for row in &rows {
        writer.write_record([row.0, row.1]).map_err(csv_err)?;
    }
    writer.flush().map_err(|e| csv_err(e.into()))?;

    Ok((
        rows.len(),
        skipped.iter().map(|b| b.name.clone()).collect(),
    ))
}

/// Export one CSV file per tier.
///
/// `confirm_overwrite` is asked before replacing an existing file; a `false`
/// answer stops the whole export with `AppError::OverwriteDeclined`, leaving
/// later tiers untouched. `on_report` sees each tier's report as soon as its
/// file is written.
///
/// # Errors
///
/// `OverwriteDeclined`, `Csv` on write failure (a partially written file may
/// remain), or whatever `confirm_overwrite` returns.
pub fn export<C, R>(
    all_backers: &[Backer],
    tiers: &[String],
    base_filename: &Path,
    mut confirm_overwrite: C,
    mut on_report: R,
) -> Result<Vec<TierReport>, AppError>
where
    C: FnMut(&Path) -> Result<bool, AppError>,
    R: FnMut(&TierReport),
{
    let mut reports = Vec::with_capacity(tiers.len());
    for tier in tiers {
        let selected = filter_by_tier(all_backers, tier);
        let path = derive_path(base_filename, tier);

        if path.exists() && !confirm_overwrite(&path)? {
            return Err(AppError::OverwriteDeclined {
                target: path.display().to_string(),
            });
        }

        let (exported, skipped) = write_tier(&selected, &path)?;
        tracing::info!(tier = %tier, path = %path.display(), exported, skipped = skipped.len(), "exported tier");

        let report = TierReport {
            tier: tier.clone(),
            path,
            exported,
            skipped,
        };
        on_report(&report);
        reports.push(report);
    }
    Ok(reports)
}
