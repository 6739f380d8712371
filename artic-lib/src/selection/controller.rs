//! Cross-page selection controller.

use std::collections::HashSet;

use crate::api::Page;
use crate::config::PAGE_SIZE;
use crate::model::Artwork;

use super::SelectedSet;
use super::SelectionIntent;

/// Where the controller is in the life of an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionPhase {
    /// No rows are owed to the latest intent.
    #[default]
    Idle,
    /// Rows are still owed and will be taken from pages as they arrive.
    Applying {
        /// Rows still to select.
        remaining: usize,
    },
}

/// Result of applying an intent or a page arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionOutcome {
    /// Artworks newly added to the selected set.
    pub added: usize,
    /// Rows still owed after this step.
    pub remaining: usize,
}

/// Turns "select the first N rows" into a selection spanning pages.
///
/// The controller owns the [`SelectedSet`] and the remaining count. Pages are
/// never cached: each arriving page is looked at once, rows are taken from its
/// front, and the rest of the intent waits for the next page.
///
/// Absent intents and empty pages are no-ops. Direct user edits
/// ([`toggle`](Self::toggle), [`set_selection`](Self::set_selection)) change
/// the set without touching the remaining count.
///
/// # Example
///
/// ```
/// use artic_lib::api::Page;
/// use artic_lib::model::Artwork;
/// use artic_lib::selection::{SelectionController, SelectionIntent};
///
/// let page = |n: u32| {
///     let first = (n as u64 - 1) * 12;
///     Page::new(n, (first + 1..=first + 12).map(|id| Artwork::new(id, "")).collect())
/// };
///
/// let mut controller = SelectionController::new();
/// controller.apply_intent(SelectionIntent::new(20), &page(1));
/// assert_eq!(controller.selected().len(), 12);
/// assert_eq!(controller.remaining(), 8);
///
/// controller.on_page_arrived(&page(2));
/// assert_eq!(controller.selected().len(), 20);
/// assert_eq!(controller.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct SelectionController {
    page_size: usize,
    selected: SelectedSet,
    remaining: usize,
    /// Page numbers already drawn from for the outstanding remainder.
    consumed: HashSet<u32>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    /// Creates an idle controller using [`PAGE_SIZE`].
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// Creates an idle controller with a custom page size.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            selected: SelectedSet::new(),
            remaining: 0,
            consumed: HashSet::new(),
        }
    }

    /// The current selection.
    pub fn selected(&self) -> &SelectedSet {
        &self.selected
    }

    /// Rows still owed to the latest intent.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn phase(&self) -> SelectionPhase {
        match self.remaining {
            0 => SelectionPhase::Idle,
            remaining => SelectionPhase::Applying { remaining },
        }
    }

    /// Applies a fresh intent to the resident page.
    ///
    /// A count within the page size selects the first `count` rows and owes
    /// nothing. A larger count selects the whole page and owes
    /// `count - page size` to later pages. Any earlier remainder is dropped.
    /// `None` or an empty page leaves everything unchanged.
    pub fn apply_intent(
        &mut self,
        intent: Option<SelectionIntent>,
        page: &Page,
    ) -> SelectionOutcome {
        let Some(intent) = intent else {
            return self.unchanged();
        };
        if page.is_empty() {
            log::debug!("Ignoring {} on empty page {}", intent, page.number());
            return self.unchanged();
        }

        let rows = self.window(page);
        let (take, remaining) = if intent.count() <= self.page_size {
            (intent.count().min(rows.len()), 0)
        } else {
            (rows.len(), intent.count() - self.page_size)
        };

        self.selected.replace(rows[..take].iter().cloned());
        self.remaining = remaining;
        self.consumed.clear();
        if self.remaining > 0 {
            self.consumed.insert(page.number());
        }

        log::debug!(
            "Applied {} on page {}: selected {}, remaining {}",
            intent,
            page.number(),
            take,
            self.remaining
        );

        SelectionOutcome {
            added: take,
            remaining: self.remaining,
        }
    }

    /// Carries an outstanding remainder onto a newly loaded page.
    ///
    /// Takes up to `remaining` rows from the front of `page` and appends them
    /// to the selection. No-op when nothing is owed, when the page is empty,
    /// or when this page number was already drawn from for the current
    /// remainder.
    pub fn on_page_arrived(&mut self, page: &Page) -> SelectionOutcome {
        if self.remaining == 0 || page.is_empty() {
            return self.unchanged();
        }
        if !self.consumed.insert(page.number()) {
            log::debug!("Page {} already consumed for this selection", page.number());
            return self.unchanged();
        }

        let rows = self.window(page);
        let take = self.remaining.min(rows.len());
        let added = rows[..take]
            .iter()
            .filter(|artwork| self.selected.insert((*artwork).clone()))
            .count();

        self.remaining -= take;
        if self.remaining == 0 {
            self.consumed.clear();
        }

        log::debug!(
            "Carried selection onto page {}: added {}, remaining {}",
            page.number(),
            added,
            self.remaining
        );

        SelectionOutcome {
            added,
            remaining: self.remaining,
        }
    }

    /// Toggles one row. Returns true if it is selected afterwards.
    pub fn toggle(&mut self, artwork: &Artwork) -> bool {
        self.selected.toggle(artwork)
    }

    /// Overwrites the selection with rows chosen directly by the user.
    pub fn set_selection(&mut self, artworks: impl IntoIterator<Item = Artwork>) {
        self.selected.replace(artworks);
    }

    /// Clears the selection and drops any outstanding remainder.
    pub fn clear(&mut self) {
        self.selected.clear();
        self.remaining = 0;
        self.consumed.clear();
    }

    /// Rows of `page` the controller will consider.
    fn window<'a>(&self, page: &'a Page) -> &'a [Artwork] {
        let records = page.records();
        &records[..records.len().min(self.page_size)]
    }

    fn unchanged(&self) -> SelectionOutcome {
        SelectionOutcome {
            added: 0,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Page `n` of a collection where ids run 1, 2, 3, ...
    fn page(n: u32, len: usize) -> Page {
        let first = (n as u64 - 1) * PAGE_SIZE as u64;
        let records = (first + 1..=first + len as u64)
            .map(|id| Artwork::new(id, format!("Work {id}")))
            .collect();
        Page::new(n, records)
    }

    fn full(n: u32) -> Page {
        page(n, PAGE_SIZE)
    }

    fn intent(count: usize) -> Option<SelectionIntent> {
        SelectionIntent::new(count)
    }

    // =========================================================================
    // apply_intent
    // =========================================================================

    #[test]
    fn test_intent_within_page_selects_first_k() {
        for k in 1..=PAGE_SIZE {
            let mut controller = SelectionController::new();
            let outcome = controller.apply_intent(intent(k), &full(1));

            let expected: Vec<u64> = (1..=k as u64).collect();
            assert_eq!(controller.selected().ids(), expected, "k = {k}");
            assert_eq!(outcome.remaining, 0);
            assert_eq!(controller.phase(), SelectionPhase::Idle);
        }
    }

    #[test]
    fn test_intent_beyond_page_selects_whole_page() {
        for k in [13, 20, 24, 100] {
            let mut controller = SelectionController::new();
            let outcome = controller.apply_intent(intent(k), &full(1));

            assert_eq!(controller.selected().len(), PAGE_SIZE);
            assert_eq!(outcome.remaining, k - PAGE_SIZE);
            assert_eq!(
                controller.phase(),
                SelectionPhase::Applying {
                    remaining: k - PAGE_SIZE
                }
            );
        }
    }

    #[test]
    fn test_no_intent_is_noop() {
        let mut controller = SelectionController::new();
        controller.apply_intent(intent(3), &full(1));

        let outcome = controller.apply_intent(intent(0), &full(1));
        assert_eq!(outcome, SelectionOutcome::default());
        assert_eq!(controller.selected().ids(), vec![1, 2, 3]);

        controller.apply_intent(SelectionIntent::parse("abc"), &full(1));
        assert_eq!(controller.selected().len(), 3);
        assert_eq!(controller.remaining(), 0);
    }

    #[test]
    fn test_intent_on_empty_page_is_noop() {
        let mut controller = SelectionController::new();
        controller.apply_intent(intent(20), &full(1));

        let outcome = controller.apply_intent(intent(5), &Page::empty(2));
        assert_eq!(outcome.added, 0);
        assert_eq!(controller.remaining(), 8);
        assert_eq!(controller.selected().len(), 12);
    }

    #[test]
    fn test_new_intent_overwrites_remainder() {
        let mut controller = SelectionController::new();
        controller.apply_intent(intent(30), &full(1));
        assert_eq!(controller.remaining(), 18);

        controller.apply_intent(intent(4), &full(1));
        assert_eq!(controller.remaining(), 0);
        assert_eq!(controller.selected().ids(), vec![1, 2, 3, 4]);

        // Nothing owed any more
        controller.on_page_arrived(&full(2));
        assert_eq!(controller.selected().len(), 4);
    }

    // =========================================================================
    // on_page_arrived
    // =========================================================================

    #[test]
    fn test_twenty_over_two_pages() {
        let mut controller = SelectionController::new();

        controller.apply_intent(intent(20), &full(1));
        assert_eq!(controller.selected().len(), 12);
        assert_eq!(controller.remaining(), 8);

        let outcome = controller.on_page_arrived(&full(2));
        assert_eq!(outcome.added, 8);
        assert_eq!(outcome.remaining, 0);
        assert_eq!(controller.selected().len(), 20);
        assert_eq!(controller.selected().ids(), (1..=20).collect::<Vec<u64>>());
    }

    #[test]
    fn test_five_then_next_page_is_noop() {
        let mut controller = SelectionController::new();
        controller.apply_intent(intent(5), &full(1));
        assert_eq!(controller.selected().ids(), vec![1, 2, 3, 4, 5]);

        let outcome = controller.on_page_arrived(&full(2));
        assert_eq!(outcome.added, 0);
        assert_eq!(controller.selected().ids(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_failed_page_keeps_remainder() {
        let mut controller = SelectionController::new();
        controller.apply_intent(intent(20), &full(1));

        let outcome = controller.on_page_arrived(&Page::empty(2));
        assert_eq!(outcome.added, 0);
        assert_eq!(controller.remaining(), 8);
        assert_eq!(controller.selected().len(), 12);

        // Retrying the page later still fills the remainder
        controller.on_page_arrived(&full(2));
        assert_eq!(controller.remaining(), 0);
        assert_eq!(controller.selected().len(), 20);
    }

    #[test]
    fn test_idle_page_arrival_never_changes_selection() {
        let mut controller = SelectionController::new();
        controller.apply_intent(intent(7), &full(1));
        controller.toggle(&Artwork::new(999, "Manual"));
        let before = controller.selected().clone();

        for n in 1..=4 {
            controller.on_page_arrived(&full(n));
        }
        assert_eq!(controller.selected(), &before);
    }

    #[test]
    fn test_conservation_across_pages() {
        for k in [1, 11, 12, 13, 25, 36, 40] {
            let mut controller = SelectionController::new();
            // 3 full pages = 36 records in total
            let supplied = 3 * PAGE_SIZE;
            let mut selected = controller.apply_intent(intent(k), &full(1)).added;
            for n in 2..=3 {
                selected += controller.on_page_arrived(&full(n)).added;
            }

            assert_eq!(selected, k.min(supplied), "k = {k}");
            assert_eq!(controller.selected().len(), k.min(supplied));
        }
    }

    #[test]
    fn test_short_page_takes_what_it_has() {
        let mut controller = SelectionController::new();
        controller.apply_intent(intent(20), &full(1));

        let outcome = controller.on_page_arrived(&page(2, 3));
        assert_eq!(outcome.added, 3);
        assert_eq!(outcome.remaining, 5);

        controller.on_page_arrived(&full(3));
        assert_eq!(controller.remaining(), 0);
        assert_eq!(controller.selected().len(), 20);
    }

    #[test]
    fn test_short_current_page_owes_by_page_size() {
        let mut controller = SelectionController::new();

        // Within the page size: whatever the page has, nothing owed
        let outcome = controller.apply_intent(intent(10), &page(3, 6));
        assert_eq!(outcome.added, 6);
        assert_eq!(outcome.remaining, 0);

        controller.on_page_arrived(&full(1));
        assert_eq!(controller.selected().ids(), (25..=30).collect::<Vec<u64>>());

        // Beyond the page size: owes count minus page size
        let outcome = controller.apply_intent(intent(20), &page(3, 6));
        assert_eq!(outcome.added, 6);
        assert_eq!(outcome.remaining, 8);
    }

    #[test]
    fn test_carried_row_already_toggled_counts_toward_remainder() {
        let mut controller = SelectionController::new();
        controller.apply_intent(intent(15), &full(1));

        // Row 2 of page 2 picked by hand before the page is carried onto
        let manual = full(2).records()[1].clone();
        assert!(controller.toggle(&manual));
        assert_eq!(controller.selected().len(), 13);

        let outcome = controller.on_page_arrived(&full(2));
        assert_eq!(outcome.added, 2);
        assert_eq!(outcome.remaining, 0);
        assert_eq!(controller.selected().len(), 15);
        assert_eq!(&controller.selected().ids()[12..], &[14, 13, 15]);
    }

    #[test]
    fn test_page_not_consumed_twice() {
        let mut controller = SelectionController::new();
        controller.apply_intent(intent(40), &full(1));

        controller.on_page_arrived(&full(2));
        assert_eq!(controller.remaining(), 16);

        // Navigating back to pages already drawn from takes nothing
        assert_eq!(controller.on_page_arrived(&full(1)).added, 0);
        assert_eq!(controller.on_page_arrived(&full(2)).added, 0);
        assert_eq!(controller.remaining(), 16);

        controller.on_page_arrived(&full(3));
        assert_eq!(controller.remaining(), 4);
    }

    #[test]
    fn test_never_takes_more_than_page_size() {
        let mut controller = SelectionController::with_page_size(4);
        let oversized = page(2, 10);
        controller.apply_intent(intent(20), &page(1, 4));

        let outcome = controller.on_page_arrived(&oversized);
        assert_eq!(outcome.added, 4);
        assert_eq!(outcome.remaining, 12);
    }

    // =========================================================================
    // Direct edits
    // =========================================================================

    #[test]
    fn test_toggle_keeps_remainder() {
        let mut controller = SelectionController::new();
        controller.apply_intent(intent(15), &full(1));

        let first = full(1).records()[0].clone();
        assert!(!controller.toggle(&first));
        assert_eq!(controller.selected().len(), 11);
        assert_eq!(controller.remaining(), 3);

        controller.on_page_arrived(&full(2));
        assert_eq!(controller.selected().len(), 14);
        assert_eq!(controller.remaining(), 0);
    }

    #[test]
    fn test_set_selection_and_clear() {
        let mut controller = SelectionController::new();
        controller.apply_intent(intent(20), &full(1));

        controller.set_selection(full(1).into_records().into_iter().take(2));
        assert_eq!(controller.selected().ids(), vec![1, 2]);
        assert_eq!(controller.remaining(), 8);

        controller.clear();
        assert!(controller.selected().is_empty());
        assert_eq!(controller.phase(), SelectionPhase::Idle);

        controller.on_page_arrived(&full(2));
        assert!(controller.selected().is_empty());
    }
}
