//! Main ArticClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::ACCEPT;
use reqwest::header::HeaderValue;
use url::Url;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::error::Error;

/// The client for the Art Institute of Chicago collection API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks safely.
///
/// # Example
///
/// ```ignore
/// use artic_lib::ArticClient;
///
/// let client = ArticClient::builder()
///     .url("https://api.artic.edu/api/v1")
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let page = client.artworks_page(1).await?;
/// ```
#[derive(Clone)]
pub struct ArticClient {
    inner: Arc<ArticClientInner>,
}

struct ArticClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl ArticClient {
    /// Creates a client for the public API with default settings.
    pub fn new() -> Result<Self, Error> {
        Self::from_config(&ClientConfig::default())
    }

    /// Creates a client from a [`ClientConfig`].
    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        Self::builder()
            .url(config.base_url.clone())
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
    }

    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArticClientBuilder<Missing> {
        ArticClientBuilder::new()
    }

    /// Returns the base URL of the API.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns the per-request timeout, if one is set.
    pub fn timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }

    /// Builds an endpoint URL below the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, Error> {
        let joined = format!(
            "{}/{}",
            self.inner.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        Url::parse(&joined).map_err(|e| Error::Api(ApiError::InvalidUrl(format!("{joined}: {e}"))))
    }

    /// Makes a GET request and rejects non-2xx responses.
    ///
    /// This is the low-level request method used by all API operations.
    pub(crate) async fn get(&self, url: Url) -> Result<reqwest::Response, Error> {
        log::debug!("GET {}", url);

        let mut request = self
            .inner
            .http_client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::from_reqwest(e, self.inner.timeout))?;

        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = if body.trim().is_empty() {
                status.canonical_reason().unwrap_or("Unknown status").to_string()
            } else {
                body
            };
            Err(Error::Api(ApiError::http(status.as_u16(), message)))
        }
    }
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`ArticClient`].
///
/// Uses the typestate pattern so `build` is only reachable once the base URL
/// is set.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use artic_lib::ArticClient;
///
/// let client = ArticClient::builder()
///     .url("http://127.0.0.1:9000/api/v1")
///     .timeout(Duration::from_secs(2))
///     .build()
///     .unwrap();
/// assert_eq!(client.base_url().as_str(), "http://127.0.0.1:9000/api/v1");
/// ```
pub struct ArticClientBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl ArticClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the API base URL.
    ///
    /// # Example
    ///
    /// ```ignore
    /// .url("https://api.artic.edu/api/v1")
    /// ```
    pub fn url(self, url: impl Into<String>) -> ArticClientBuilder<Set<String>> {
        ArticClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for ArticClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ArticClientBuilder<U> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl ArticClientBuilder<Set<String>> {
    /// Builds the [`ArticClient`].
    ///
    /// Fails when the URL does not parse or is not http(s).
    pub fn build(self) -> Result<ArticClient, Error> {
        let raw = self.url.0;
        let base_url = Url::parse(raw.trim())
            .map_err(|e| Error::Api(ApiError::InvalidUrl(format!("{raw}: {e}"))))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::Api(ApiError::InvalidUrl(format!(
                "{raw}: unsupported scheme"
            ))));
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(ArticClient {
            inner: Arc::new(ArticClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
