//! Error types

mod api;

pub use api::*;

/// Top-level error returned by the artwork client and data sources.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The remote API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A configuration value could not be used.
    #[error("Invalid configuration for {key}: {message}")]
    Config {
        /// The setting that was rejected.
        key: String,
        /// Why it was rejected.
        message: String,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Config {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(api) => api.status_code(),
            Self::Config { .. } => None,
        }
    }
}
