/// `list-backers` command: list current backers, optionally for one tier.
use super::Session;
use crate::api::{Transport, fetch_active_backers};
use crate::backers::{AppError, Backer, filter_by_tier, known_tiers, suggest_tiers};
use crate::cli::OutputCtx;
use crate::cli::args::ListBackersArgs;
use crate::cli::output::write_backers;
use crate::types::BackerOutput;

/// Run `oc-export list-backers`.
///
/// # Errors
///
/// Returns `AppError` on token lookup or API failure.
pub fn run(args: &ListBackersArgs, session: &mut Session<'_>) -> Result<(), AppError> {
    let client = session.connect()?;
    let ctx = session.ctx;
    let backers = select(args, &client, ctx)?;

    let header = match &args.tier {
        Some(tier) => format!(
            "Found the following {} backers for tier {tier} and organization {}:",
            backers.len(),
            args.org
        ),
        None => format!(
            "Found the following {} backers for all tiers on organization {}:",
            backers.len(),
            args.org
        ),
    };
    ctx.status(&header);

    let output: Vec<BackerOutput> = backers.iter().map(BackerOutput::from).collect();
    write_backers(&output, ctx);
    Ok(())
}

/// Fetch the organization's backers and narrow them to `args.tier`.
///
/// An unknown tier is not an error; it yields no backers and a warning with
/// close tier names when there are any.
///
/// # Errors
///
/// Returns `AppError::Api` on transport failure.
pub fn select<T: Transport + ?Sized>(
    args: &ListBackersArgs,
    transport: &T,
    ctx: &OutputCtx,
) -> Result<Vec<Backer>, AppError> {
    let t_fetch = ctx.timer("fetch_active_backers");
    let all = fetch_active_backers(transport, &args.org)?;
    drop(t_fetch);

    let backers = match &args.tier {
        Some(tier) => {
            let selected = filter_by_tier(&all, tier);
            if selected.is_empty() {
                warn_unknown_tier(tier, &all, ctx);
            }
            selected
        }
        None => all,
    };

    for backer in &backers {
        tracing::debug!(?backer, "backer");
    }
    Ok(backers)
}

/// Warn that `tier` matched nobody, with suggestions drawn from `backers`.
pub fn warn_unknown_tier(tier: &str, backers: &[Backer], ctx: &OutputCtx) {
    let known = known_tiers(backers);
    if known.contains(&tier) {
        return;
    }
    let suggestions = suggest_tiers(tier, &known, 3);
    if suggestions.is_empty() {
        ctx.warn(&format!("No backers found for tier '{tier}'."));
    } else {
        ctx.warn(&format!(
            "No backers found for tier '{tier}'. Did you mean: {}?",
            suggestions.join(", ")
        ));
    }
}
