//! Page type for paginated artwork results.

use serde::Deserialize;

use crate::model::Artwork;

/// Pagination block of an `/artworks` response.
///
/// Missing or malformed metadata collapses to zeros, which the table treats
/// as "no pages".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// Total number of records across all pages.
    pub total: u64,
    /// Records per page.
    pub limit: u64,
    /// Offset of the first record on this page.
    pub offset: u64,
    /// Number of pages reported by the API.
    pub total_pages: u64,
    /// 1-based page number reported by the API.
    pub current_page: u64,
    pub next_url: Option<String>,
    pub prev_url: Option<String>,
}

impl Pagination {
    /// Reads pagination from a raw JSON value, falling back to zeros.
    pub fn from_json(value: Option<serde_json::Value>) -> Self {
        match value {
            Some(value) => serde_json::from_value(value).unwrap_or_else(|e| {
                log::warn!("Ignoring malformed pagination metadata: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Number of pages implied by `total` and `limit`.
    ///
    /// Returns 0 when either is unknown.
    pub fn page_count(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }
}

/// A page of artworks with pagination information.
///
/// Pages are never merged: each fetch produces a fresh `Page` that replaces
/// the previous one.
///
/// # Example
///
/// ```
/// use artic_lib::api::Page;
/// use artic_lib::model::Artwork;
///
/// let page = Page::new(2, vec![Artwork::new(1, "Water Lilies")]);
/// assert_eq!(page.number(), 2);
/// assert_eq!(page.len(), 1);
/// assert!(Page::empty(3).is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Page number this page was requested as.
    number: u32,
    records: Vec<Artwork>,
    pagination: Pagination,
}

impl Page {
    /// Creates a page with records and no pagination metadata.
    pub fn new(number: u32, records: Vec<Artwork>) -> Self {
        Self {
            number,
            records,
            pagination: Pagination::default(),
        }
    }

    /// Creates a page with no records, used when a fetch fails.
    pub fn empty(number: u32) -> Self {
        Self::new(number, Vec::new())
    }

    /// Sets the pagination metadata.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Returns the page number this page was requested as.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Artwork> {
        self.records
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Total pages available, or 0 when unknown.
    pub fn total_pages(&self) -> u64 {
        self.pagination.page_count()
    }
}
