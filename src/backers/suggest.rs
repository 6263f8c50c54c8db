/// "Did you mean" suggestions for tier names that matched nothing.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{CaseMatching, Normalization, Pattern},
};

/// Return up to `limit` candidates that fuzzily match `query`, best first.
///
/// Exact matches are excluded since they need no suggestion.
#[must_use]
pub fn suggest_tiers(query: &str, candidates: &[&str], limit: usize) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut scored: Vec<(&str, u32)> = candidates
        .iter()
        .filter(|c| **c != query)
        .filter_map(|c| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(c, &mut buf);
            pattern.score(haystack, &mut matcher).map(|score| (*c, score))
        })
        .collect();

    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored
        .into_iter()
        .take(limit)
        .map(|(c, _)| c.to_owned())
        .collect()
}
