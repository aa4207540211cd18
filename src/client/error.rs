//! Fetch and search errors.

use thiserror::Error;

/// Error type a transport reports when a request could not complete.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("fetch failed: {0}")]
    FetchFailed(#[source] BoxError),
}

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid search term: {0:?}")]
    InvalidTerm(String),

    #[error(transparent)]
    Underlying(#[from] NetworkError),

    #[error("response body is not a JSON object")]
    InvalidDecode,
}
