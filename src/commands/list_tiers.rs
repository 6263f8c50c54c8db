/// `list-tiers` command: list the tiers of an organization.
use super::Session;
use crate::api::fetch_tiers;
use crate::backers::AppError;
use crate::cli::args::ListTiersArgs;
use crate::cli::output::write_tiers;

/// Run `oc-export list-tiers`.
///
/// # Errors
///
/// Returns `AppError` on token lookup or API failure.
pub fn run(args: &ListTiersArgs, session: &mut Session<'_>) -> Result<(), AppError> {
    let client = session.connect()?;
    let ctx = session.ctx;

    let t_fetch = ctx.timer("fetch_tiers");
    let tiers = fetch_tiers(&client, &args.org)?;
    drop(t_fetch);

    ctx.status(&format!(
        "The following tiers are available for the organization {}:",
        args.org
    ));
    write_tiers(&tiers, ctx);
    Ok(())
}
