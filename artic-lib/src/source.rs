//! Page data sources

use std::collections::HashSet;

use async_trait::async_trait;

use crate::ArticClient;
use crate::api::Page;
use crate::api::Pagination;
use crate::config::PAGE_SIZE;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Artwork;

/// Trait for anything that can produce a page of artworks by number.
///
/// The session depends on this trait rather than on [`ArticClient`] so that
/// selection behaviour can be exercised without a network.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use artic_lib::source::DataSource;
///
/// struct Fixed(Page);
///
/// #[async_trait]
/// impl DataSource for Fixed {
///     async fn fetch_page(&self, _page: u32) -> Result<Page, Error> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches the 1-based page `page`.
    async fn fetch_page(&self, page: u32) -> Result<Page, Error>;
}

#[async_trait]
impl DataSource for ArticClient {
    async fn fetch_page(&self, page: u32) -> Result<Page, Error> {
        self.artworks_page(page).await
    }
}

/// Fetches a page, turning any failure into an empty page.
///
/// The failure is logged; callers never see it.
pub async fn load_page_or_empty<S>(source: &S, page: u32) -> Page
where
    S: DataSource + ?Sized,
{
    page_or_empty(source.fetch_page(page).await, page)
}

/// Unwraps a fetch result, logging and substituting an empty page on failure.
pub fn page_or_empty(result: Result<Page, Error>, page: u32) -> Page {
    match result {
        Ok(page) => page,
        Err(e) => {
            log::error!("Error fetching page {}: {}", page, e);
            Page::empty(page)
        }
    }
}

/// An in-memory data source over a fixed list of artworks.
///
/// Useful for testing or offline demos. Pages listed with
/// [`fail_page`](Self::fail_page) return an HTTP 503 error.
///
/// # Example
///
/// ```
/// use artic_lib::model::Artwork;
/// use artic_lib::source::MemorySource;
///
/// let artworks = (1..=30).map(|id| Artwork::new(id, format!("Work {id}"))).collect();
/// let source = MemorySource::new(artworks);
/// assert_eq!(source.total(), 30);
/// ```
#[derive(Debug, Clone)]
pub struct MemorySource {
    artworks: Vec<Artwork>,
    page_size: usize,
    failing: HashSet<u32>,
}

impl MemorySource {
    /// Creates a source paging `artworks` by [`PAGE_SIZE`].
    pub fn new(artworks: Vec<Artwork>) -> Self {
        Self {
            artworks,
            page_size: PAGE_SIZE,
            failing: HashSet::new(),
        }
    }

    /// Overrides the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Makes `page` fail on every fetch.
    pub fn fail_page(mut self, page: u32) -> Self {
        self.failing.insert(page);
        self
    }

    /// Total number of artworks.
    pub fn total(&self) -> usize {
        self.artworks.len()
    }

    fn page(&self, page: u32) -> Page {
        let page = page.max(1);
        let start = (page as usize - 1).saturating_mul(self.page_size);
        let records: Vec<Artwork> = self
            .artworks
            .iter()
            .skip(start)
            .take(self.page_size)
            .cloned()
            .collect();

        let total = self.artworks.len() as u64;
        let limit = self.page_size as u64;
        let pagination = Pagination {
            total,
            limit,
            offset: start as u64,
            total_pages: total.div_ceil(limit),
            current_page: page as u64,
            next_url: None,
            prev_url: None,
        };

        Page::new(page, records).with_pagination(pagination)
    }
}

#[async_trait]
impl DataSource for MemorySource {
    async fn fetch_page(&self, page: u32) -> Result<Page, Error> {
        if self.failing.contains(&page) {
            return Err(Error::Api(ApiError::http(503, "Service Unavailable")));
        }
        Ok(self.page(page))
    }
}
