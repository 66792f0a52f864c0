//! Error types for page-capture.
//!
//! The core pipeline operations are total and never fail. This enum covers
//! the helpers layered on top of them: base URL parsing and response
//! serialization.

/// Error type for the fallible helper operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A base URL was required but none could be derived.
    #[error("No base URL available")]
    MissingBaseUrl,

    /// The base URL could not be parsed as an absolute URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Serializing a response envelope failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for the fallible helper operations.
pub type Result<T> = std::result::Result<T, Error>;
