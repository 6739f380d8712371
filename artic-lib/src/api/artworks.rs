//! Artwork listing

use serde::Deserialize;
use url::Url;

use crate::ArticClient;
use crate::api::Page;
use crate::api::Pagination;
use crate::config::ARTWORK_FIELDS;
use crate::config::PAGE_SIZE;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Artwork;

/// Raw `/artworks` response body.
#[derive(Debug, Deserialize)]
struct ArtworksResponse {
    /// The records in this page.
    data: Vec<Artwork>,
    /// Kept loose so a malformed block degrades to zeros instead of failing the page.
    #[serde(default)]
    pagination: Option<serde_json::Value>,
}

impl ArticClient {
    /// Fetches one page of artworks.
    ///
    /// Page numbers are 1-based; `0` is sent as `1`.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let page = client.artworks_page(2).await?;
    /// for artwork in page.records() {
    ///     println!("{} {}", artwork.id, artwork.title());
    /// }
    /// ```
    pub async fn artworks_page(&self, page: u32) -> Result<Page, Error> {
        let page = page.max(1);
        let url = artworks_url(&self.endpoint("artworks")?, page);

        let response = self.get(url).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::from_reqwest(e, self.timeout()))?;

        parse_artworks(&body, page)
    }
}

/// Appends paging and field selection to the `/artworks` endpoint.
pub fn artworks_url(endpoint: &Url, page: u32) -> Url {
    let mut url = endpoint.clone();
    url.query_pairs_mut()
        .append_pair("page", &page.to_string())
        .append_pair("limit", &PAGE_SIZE.to_string())
        .append_pair("fields", &ARTWORK_FIELDS.join(","));
    url
}

/// Parses an `/artworks` body into a [`Page`].
pub fn parse_artworks(body: &str, page: u32) -> Result<Page, Error> {
    let response: ArtworksResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::parse_with_body(e.to_string(), body))?;

    Ok(Page::new(page, response.data).with_pagination(Pagination::from_json(response.pagination)))
}
