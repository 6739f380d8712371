//! Table session state

use crate::api::Page;
use crate::error::Error;
use crate::model::Artwork;
use crate::selection::SelectedSet;
use crate::selection::SelectionController;
use crate::selection::SelectionIntent;
use crate::selection::SelectionOutcome;
use crate::source::DataSource;
use crate::source::page_or_empty;

/// Handle for one in-flight page request.
///
/// Only the ticket from the most recent [`TableSession::begin_request`] is
/// accepted when the response comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    page: u32,
    generation: u64,
}

impl PageTicket {
    /// Requested page number.
    pub fn page(&self) -> u32 {
        self.page
    }
}

/// What happened to a completed page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page was installed (possibly empty after a failure).
    Loaded {
        /// Page number now resident.
        page: u32,
        /// Records on the page.
        records: usize,
        /// Effect on the selection.
        selection: SelectionOutcome,
    },
    /// A newer request was issued before this one finished; it was dropped.
    Stale {
        /// Page number of the dropped response.
        page: u32,
    },
}

/// State behind one artwork table.
///
/// Owns the resident page, the loading flags, the request generation counter
/// and the [`SelectionController`]. One session per user; nothing here is
/// shared.
///
/// # Example
///
/// ```ignore
/// let client = ArticClient::new()?;
/// let mut session = TableSession::new();
///
/// session.goto_page(&client, 1).await;
/// session.select_rows("20");
/// session.next_page(&client).await;
///
/// assert_eq!(session.selected().len(), 20);
/// ```
#[derive(Debug, Clone)]
pub struct TableSession {
    current_page: u32,
    page: Page,
    loading: bool,
    initial_load: bool,
    generation: u64,
    selection: SelectionController,
}

impl Default for TableSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSession {
    /// Creates a session on page 1 with nothing loaded yet.
    pub fn new() -> Self {
        Self::with_controller(SelectionController::new())
    }

    /// Creates a session around an existing controller.
    pub fn with_controller(selection: SelectionController) -> Self {
        Self {
            current_page: 1,
            page: Page::empty(1),
            loading: false,
            initial_load: true,
            generation: 0,
            selection,
        }
    }

    /// Page number last requested.
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// The resident page.
    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn records(&self) -> &[Artwork] {
        self.page.records()
    }

    /// `true` while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// `true` until the first response has been installed.
    pub fn is_initial_load(&self) -> bool {
        self.initial_load
    }

    pub fn selection(&self) -> &SelectionController {
        &self.selection
    }

    pub fn selected(&self) -> &SelectedSet {
        self.selection.selected()
    }

    /// Pages reported by the resident page's metadata, 0 when unknown.
    pub fn total_pages(&self) -> u64 {
        self.page.total_pages()
    }

    /// Starts a request for `page`, superseding any outstanding one.
    pub fn begin_request(&mut self, page: u32) -> PageTicket {
        let page = page.max(1);
        self.generation += 1;
        self.current_page = page;
        self.loading = true;
        PageTicket {
            page,
            generation: self.generation,
        }
    }

    /// Installs the response for `ticket`, unless a newer request exists.
    ///
    /// Failures become an empty page. Every installed page is offered to the
    /// selection controller so an outstanding remainder can be carried onto it.
    pub fn complete_request(
        &mut self,
        ticket: PageTicket,
        result: Result<Page, Error>,
    ) -> PageOutcome {
        if ticket.generation != self.generation {
            log::warn!(
                "Dropping stale response for page {} (generation {}, latest {})",
                ticket.page,
                ticket.generation,
                self.generation
            );
            return PageOutcome::Stale { page: ticket.page };
        }

        let page = page_or_empty(result, ticket.page);
        self.page = page;
        self.loading = false;
        self.initial_load = false;

        let selection = self.selection.on_page_arrived(&self.page);

        PageOutcome::Loaded {
            page: ticket.page,
            records: self.page.len(),
            selection,
        }
    }

    /// Fetches `page` from `source` and installs it.
    pub async fn goto_page<S>(&mut self, source: &S, page: u32) -> PageOutcome
    where
        S: DataSource + ?Sized,
    {
        let ticket = self.begin_request(page);
        let result = source.fetch_page(ticket.page).await;
        self.complete_request(ticket, result)
    }

    /// Moves to the next page, or returns `None` when already on the last
    /// known page.
    pub async fn next_page<S>(&mut self, source: &S) -> Option<PageOutcome>
    where
        S: DataSource + ?Sized,
    {
        let total = self.total_pages();
        if total > 0 && u64::from(self.current_page) >= total {
            return None;
        }
        let next = self.current_page.saturating_add(1);
        Some(self.goto_page(source, next).await)
    }

    /// Moves to the previous page, or returns `None` on page 1.
    pub async fn prev_page<S>(&mut self, source: &S) -> Option<PageOutcome>
    where
        S: DataSource + ?Sized,
    {
        if self.current_page <= 1 {
            return None;
        }
        let prev = self.current_page - 1;
        Some(self.goto_page(source, prev).await)
    }

    /// Fetches the current page again.
    pub async fn reload<S>(&mut self, source: &S) -> PageOutcome
    where
        S: DataSource + ?Sized,
    {
        self.goto_page(source, self.current_page).await
    }

    /// Applies a typed "select N rows" request to the resident page.
    ///
    /// Input that is not a positive integer is ignored.
    pub fn select_rows(&mut self, input: &str) -> SelectionOutcome {
        self.apply_intent(SelectionIntent::parse(input))
    }

    /// Applies an intent to the resident page.
    pub fn apply_intent(&mut self, intent: Option<SelectionIntent>) -> SelectionOutcome {
        self.selection.apply_intent(intent, &self.page)
    }

    /// Toggles the row at `index` on the resident page.
    ///
    /// Returns the new state, or `None` if there is no such row.
    pub fn toggle_row(&mut self, index: usize) -> Option<bool> {
        let artwork = self.page.records().get(index)?.clone();
        Some(self.selection.toggle(&artwork))
    }

    /// Overwrites the selection with rows picked directly in the table.
    pub fn set_selection(&mut self, artworks: impl IntoIterator<Item = Artwork>) {
        self.selection.set_selection(artworks);
    }

    /// Clears the selection and any pending remainder.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// `true` if the row at `index` on the resident page is selected.
    pub fn is_row_selected(&self, index: usize) -> bool {
        self.page
            .records()
            .get(index)
            .is_some_and(|a| self.selection.selected().contains(a.id))
    }
}
