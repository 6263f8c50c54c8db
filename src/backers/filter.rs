/// Tier-based selection of backers.
use super::Backer;

/// Select the backers whose tier is exactly `tier_name`.
///
/// Case-sensitive, no trimming. Order is preserved and an unknown tier simply
/// yields nothing.
#[must_use]
pub fn filter_by_tier(backers: &[Backer], tier_name: &str) -> Vec<Backer> {
    backers
        .iter()
        .filter(|b| b.tier_description == tier_name)
        .cloned()
        .collect()
}

/// Distinct tier descriptions carried by `backers`, in first-seen order.
#[must_use]
pub fn known_tiers(backers: &[Backer]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for b in backers {
        if !seen.contains(&b.tier_description.as_str()) {
            seen.push(&b.tier_description);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backers::backer;

    fn sample() -> Vec<Backer> {
        vec![
            backer("Alice", "Gold", &["a@x.com"]),
            backer("Bob", "Silver", &[]),
            backer("Carol", "Gold", &["c@x.com"]),
            backer("Dave", "gold", &["d@x.com"]),
        ]
    }

    #[test]
    fn test_exact_match_preserves_order() {
        let gold = filter_by_tier(&sample(), "Gold");
        let names: Vec<&str> = gold.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Carol"]);
    }

    #[test]
    fn test_case_sensitive_and_untrimmed() {
        assert_eq!(filter_by_tier(&sample(), "gold").len(), 1);
        assert!(filter_by_tier(&sample(), "Gold ").is_empty());
    }

    #[test]
    fn test_unknown_tier_is_empty() {
        assert!(filter_by_tier(&sample(), "Platinum").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let once = filter_by_tier(&sample(), "Gold");
        let twice = filter_by_tier(&once, "Gold");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_known_tiers_distinct() {
        assert_eq!(known_tiers(&sample()), vec!["Gold", "Silver", "gold"]);
    }
}
