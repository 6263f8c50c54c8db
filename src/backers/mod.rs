/// Backer domain layer: the model, tier filtering, CSV export, suggestions.
pub mod errors;
pub mod export;
pub mod filter;
pub mod suggest;

pub use errors::AppError;
pub use export::{TierReport, default_base_filename, export};
pub use filter::{filter_by_tier, known_tiers};
pub use suggest::suggest_tiers;

/// A financial contributor of a collective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backer {
    /// Display name.
    pub name: String,
    /// Tier the contribution belongs to; empty for non-tiered contributions.
    pub tier_description: String,
    /// Email addresses, oldest first.
    pub emails: Vec<String>,
}

impl Backer {
    /// The most recently added email address, which is the one exported.
    #[must_use]
    pub fn preferred_email(&self) -> Option<&str> {
        self.emails.last().map(String::as_str)
    }
}

#[cfg(test)]
pub(crate) fn backer(name: &str, tier: &str, emails: &[&str]) -> Backer {
    Backer {
        name: name.to_owned(),
        tier_description: tier.to_owned(),
        emails: emails.iter().map(|e| (*e).to_owned()).collect(),
    }
}
