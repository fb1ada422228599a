//! Comparison selection state machine.
//!
//! Session-local accumulation of up to two dashboard ids, committed into a
//! shareable comparison route. Never persisted; navigating away from the
//! catalogue view drops the selector.

/// Maximum dashboards in one comparison.
pub const MAX_COMPARE: usize = 2;

/// Observable state of the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    /// Comparison mode is off.
    Inactive,
    /// Comparison mode is on with fewer than two selections.
    Selecting,
    /// Exactly two selections; commit is available.
    ReadyToCompare,
}

/// Result of a toggle call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// A third distinct id while two are selected: silently rejected,
    /// nothing is evicted.
    Rejected,
    /// Toggle outside comparison mode is ignored.
    NotSelecting,
}

/// Accumulates a comparison selection.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSelector {
    active: bool,
    selection: Vec<String>,
}

impl ComparisonSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectorState {
        if !self.active {
            SelectorState::Inactive
        } else if self.selection.len() == MAX_COMPARE {
            SelectorState::ReadyToCompare
        } else {
            SelectorState::Selecting
        }
    }

    /// Enter comparison mode, clearing any prior selection.
    pub fn start(&mut self) {
        self.active = true;
        self.selection.clear();
    }

    /// Leave comparison mode, discarding the selection.
    pub fn cancel(&mut self) {
        self.active = false;
        self.selection.clear();
    }

    /// Toggle an id in or out of the selection.
    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if !self.active {
            return ToggleOutcome::NotSelecting;
        }
        if let Some(position) = self.selection.iter().position(|s| s == id) {
            self.selection.remove(position);
            return ToggleOutcome::Removed;
        }
        if self.selection.len() >= MAX_COMPARE {
            return ToggleOutcome::Rejected;
        }
        self.selection.push(id.to_string());
        ToggleOutcome::Added
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.iter().any(|s| s == id)
    }

    /// The shareable comparison route, available only with exactly two
    /// selections.
    pub fn commit(&self) -> Option<String> {
        if self.state() != SelectorState::ReadyToCompare {
            return None;
        }
        Some(format!(
            "/compare?dashboards={},{}",
            self.selection[0], self.selection[1]
        ))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_inactive() {
        let selector = ComparisonSelector::new();
        assert_eq!(selector.state(), SelectorState::Inactive);
        assert_eq!(selector.commit(), None);
    }

    #[test]
    fn test_toggle_outside_comparison_mode_is_ignored() {
        let mut selector = ComparisonSelector::new();
        assert_eq!(selector.toggle("linkedin"), ToggleOutcome::NotSelecting);
        assert!(selector.selection().is_empty());
    }

    #[test]
    fn test_two_selections_reach_ready() {
        let mut selector = ComparisonSelector::new();
        selector.start();
        assert_eq!(selector.state(), SelectorState::Selecting);

        assert_eq!(selector.toggle("linkedin"), ToggleOutcome::Added);
        assert_eq!(selector.state(), SelectorState::Selecting);

        assert_eq!(selector.toggle("odoo"), ToggleOutcome::Added);
        assert_eq!(selector.state(), SelectorState::ReadyToCompare);
    }

    #[test]
    fn test_third_id_is_silently_rejected() {
        let mut selector = ComparisonSelector::new();
        selector.start();
        selector.toggle("linkedin");
        selector.toggle("odoo");

        assert_eq!(selector.toggle("planable"), ToggleOutcome::Rejected);
        assert_eq!(selector.selection(), ["linkedin", "odoo"]);
        assert_eq!(selector.state(), SelectorState::ReadyToCompare);
    }

    #[test]
    fn test_removal_drops_back_to_selecting() {
        let mut selector = ComparisonSelector::new();
        selector.start();
        selector.toggle("linkedin");
        selector.toggle("odoo");

        assert_eq!(selector.toggle("linkedin"), ToggleOutcome::Removed);
        assert_eq!(selector.state(), SelectorState::Selecting);
        assert_eq!(selector.selection(), ["odoo"]);
    }

    #[test]
    fn test_commit_encodes_both_ids_in_selection_order() {
        let mut selector = ComparisonSelector::new();
        selector.start();
        selector.toggle("google-analytics");
        selector.toggle("linkedin");

        assert_eq!(
            selector.commit().as_deref(),
            Some("/compare?dashboards=google-analytics,linkedin")
        );
    }

    #[test]
    fn test_commit_unavailable_below_two() {
        let mut selector = ComparisonSelector::new();
        selector.start();
        selector.toggle("linkedin");
        assert_eq!(selector.commit(), None);
    }

    #[test]
    fn test_cancel_discards_from_any_state() {
        let mut selector = ComparisonSelector::new();
        selector.start();
        selector.toggle("linkedin");
        selector.toggle("odoo");

        selector.cancel();
        assert_eq!(selector.state(), SelectorState::Inactive);
        assert!(selector.selection().is_empty());
    }

    #[test]
    fn test_start_clears_prior_selection() {
        let mut selector = ComparisonSelector::new();
        selector.start();
        selector.toggle("linkedin");

        selector.start();
        assert!(selector.selection().is_empty());
        assert_eq!(selector.state(), SelectorState::Selecting);
    }
}

#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// The selection never exceeds two ids, whatever the toggle
        /// sequence.
        #[test]
        fn prop_selection_is_bounded(
            ids in proptest::collection::vec("[a-e]", 0..40)
        ) {
            let mut selector = ComparisonSelector::new();
            selector.start();
            for id in &ids {
                selector.toggle(id);
                prop_assert!(selector.selection().len() <= MAX_COMPARE);
            }
        }

        /// Commit is available exactly when two ids are selected.
        #[test]
        fn prop_commit_iff_ready(
            ids in proptest::collection::vec("[a-e]", 0..40)
        ) {
            let mut selector = ComparisonSelector::new();
            selector.start();
            for id in &ids {
                selector.toggle(id);
            }
            let ready = selector.state() == SelectorState::ReadyToCompare;
            prop_assert_eq!(selector.commit().is_some(), ready);
            prop_assert_eq!(ready, selector.selection().len() == MAX_COMPARE);
        }
    }
}
