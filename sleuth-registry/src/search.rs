//! Free-text catalogue filtering.

use sleuth_core::DashboardConfig;

/// Filter catalogue entries by a free-text term.
///
/// Case-insensitive substring match against title OR description. A blank
/// (empty or whitespace-only) term returns the full input. Relative order
/// is preserved. Pure function, safe to call on every keystroke.
pub fn filter<'a>(entries: &'a [DashboardConfig], term: &str) -> Vec<&'a DashboardConfig> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return entries.iter().collect();
    }

    entries
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&term)
                || entry.description.to_lowercase().contains(&term)
        })
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================


#[cfg(test)]
mod prop_tests {
    use super::*;
    use crate::catalog::builtin_entries;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Filtering is case-insensitive for any ASCII term.
        #[test]
        fn prop_filter_ignores_case(term in "[a-zA-Z ]{0,16}") {
            let entries = builtin_entries();
            let upper: Vec<String> = filter(&entries, &term.to_uppercase())
                .iter().map(|e| e.id.clone()).collect();
            let lower: Vec<String> = filter(&entries, &term.to_lowercase())
                .iter().map(|e| e.id.clone()).collect();
            prop_assert_eq!(upper, lower);
        }

        /// The result is always an order-preserving subset of the input.
        #[test]
        fn prop_filter_is_an_ordered_subset(term in ".{0,16}") {
            let entries = builtin_entries();
            let results = filter(&entries, &term);
            prop_assert!(results.len() <= entries.len());

            let positions: Vec<usize> = results
                .iter()
                .map(|r| entries.iter().position(|e| e.id == r.id).unwrap())
                .collect();
            let mut sorted = positions.clone();
            sorted.sort_unstable();
            prop_assert_eq!(positions, sorted);
        }
    }
}
