//! Client configuration

use std::time::Duration;

use url::Url;

use crate::error::Error;

/// Number of artworks shown on one page of the table.
pub const PAGE_SIZE: usize = 12;

/// Public Art Institute of Chicago API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Fields requested for every artwork row.
pub const ARTWORK_FIELDS: &[&str] = &[
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "ARTIC_API_URL";

/// Environment variable overriding the request timeout, in whole seconds.
pub const ENV_TIMEOUT_SECS: &str = "ARTIC_TIMEOUT_SECS";

/// Runtime settings for [`ArticClient`](crate::ArticClient).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use artic_lib::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url, "https://api.artic.edu/api/v1");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, without the `/artworks` suffix.
    ///
    /// Default: [`DEFAULT_BASE_URL`]
    pub base_url: String,

    /// Per-request timeout.
    ///
    /// Default: 15 seconds
    pub timeout: Duration,

    /// TCP connect timeout.
    ///
    /// Default: 5 seconds
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(15),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds a config from the process environment.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            let url = url.trim();
            if !url.is_empty() {
                Url::parse(url).map_err(|e| Error::config(ENV_API_URL, e.to_string()))?;
                config.base_url = url.to_string();
            }
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs
                .trim()
                .parse()
                .map_err(|_| Error::config(ENV_TIMEOUT_SECS, format!("not a number: {secs:?}")))?;
            if secs == 0 {
                return Err(Error::config(ENV_TIMEOUT_SECS, "must be at least 1"));
            }
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
