/// `export` command: write one CSV file of names and emails per tier.
use std::path::Path;

use chrono::Local;

use super::Session;
use super::list_backers::warn_unknown_tier;
use crate::api::{Transport, fetch_active_backers, fetch_tiers};
use crate::backers::{AppError, TierReport, default_base_filename, export};
use crate::cli::OutputCtx;
use crate::cli::args::ExportArgs;
use crate::cli::output::write_export_report;
use crate::types::ExportOutput;

/// Run `oc-export export`.
///
/// # Errors
///
/// Returns `AppError` on token lookup, API, or write failure, and
/// `OverwriteDeclined` when the user keeps an existing file.
pub fn run(args: &ExportArgs, session: &mut Session<'_>) -> Result<(), AppError> {
    let client = session.connect()?;
    let base = args
        .base_filename
        .clone()
        .unwrap_or_else(|| default_base_filename(Local::now().date_naive()));

    let ctx = session.ctx;
    let prompter = &mut *session.prompter;
    execute(&args.org, &args.tiers, &base, &client, ctx, |path| {
        Ok(prompter.confirm(&format!(
            "Warning: Output file \"{}\" already exists. Overwrite it?",
            path.display()
        ))?)
    })?;
    Ok(())
}

/// Fetch backers (and, when `tiers` is empty, the tier catalog) and export
/// every tier next to `base`.
///
/// # Errors
///
/// Returns `AppError` from the API or the exporter.
pub fn execute<T, C>(
    org: &str,
    tiers: &[String],
    base: &Path,
    transport: &T,
    ctx: &OutputCtx,
    confirm_overwrite: C,
) -> Result<Vec<TierReport>, AppError>
where
    T: Transport + ?Sized,
    C: FnMut(&Path) -> Result<bool, AppError>,
{
    ctx.status("Querying Open Collective (may take a moment)...");
    let t_fetch = ctx.timer("fetch_active_backers");
    let all = fetch_active_backers(transport, org)?;
    drop(t_fetch);

    let tiers = if tiers.is_empty() {
        ctx.status("No tiers specified, using all available tiers.");
        let _t_tiers = ctx.timer("fetch_tiers");
        fetch_tiers(transport, org)?
    } else {
        for tier in tiers {
            warn_unknown_tier(tier, &all, ctx);
        }
        tiers.to_vec()
    };

    export(&all, &tiers, base, confirm_overwrite, |report| {
        write_export_report(&ExportOutput::from(report), ctx);
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::{Value, json};

    use super::*;
    use crate::api::ApiError;
    use crate::api::transport::testing::ScriptedTransport;
    use crate::commands::testing::ctx;

    fn backers_page() -> Result<Value, ApiError> {
        Ok(json!({
            "collective": {
                "contributors": {
                    "totalCount": 3,
                    "nodes": [
                        { "name": "Alice", "description": "Gold Star", "account": { "emails": ["old@x.com", "z@x.com"] } },
                        { "name": "Bob", "description": "Gold Star", "account": { "emails": ["b@x.com"] } },
                        { "name": "Carol", "description": "Silver", "account": { "emails": [] } }
                    ]
                }
            }
        }))
    }

    fn tiers_page() -> Result<Value, ApiError> {
        Ok(json!({
            "collective": {
                "tiers": { "totalCount": 2, "nodes": [{ "name": "Gold Star" }, { "name": "Silver" }] }
            }
        }))
    }

    #[test]
    fn test_all_tiers_from_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("backers.csv");
        let transport = ScriptedTransport::new(vec![backers_page(), tiers_page()]);

        let reports = execute("getsolus", &[], &base, &transport, &ctx(), |_| Ok(true)).unwrap();

        assert_eq!(transport.call_count(), 2);
        assert_eq!(reports.len(), 2);
        let gold = fs::read_to_string(dir.path().join("backers-Gold_Star.csv")).unwrap();
        assert_eq!(gold.lines().collect::<Vec<_>>(), vec!["Bob,b@x.com", "Alice,z@x.com"]);
        assert_eq!(reports[1].tier, "Silver");
        assert_eq!(reports[1].exported, 0);
        assert_eq!(reports[1].skipped, vec!["Carol"]);
    }

    #[test]
    fn test_requested_tiers_skip_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("backers.csv");
        let transport = ScriptedTransport::new(vec![backers_page()]);

        let reports = execute(
            "getsolus",
            &["Silver".to_owned()],
            &base,
            &transport,
            &ctx(),
            |_| Ok(true),
        )
        .unwrap();

        assert_eq!(transport.call_count(), 1);
        assert_eq!(reports.len(), 1);
        assert!(!dir.path().join("backers-Gold_Star.csv").exists());
    }

    #[test]
    fn test_declined_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("backers.csv");
        fs::write(dir.path().join("backers-Gold_Star.csv"), "keep\n").unwrap();
        let transport = ScriptedTransport::new(vec![backers_page(), tiers_page()]);

        let err = execute("getsolus", &[], &base, &transport, &ctx(), |_| Ok(false)).unwrap_err();

        assert!(err.is_clean_exit());
        assert!(!dir.path().join("backers-Silver.csv").exists());
    }
}
