//! Error types for the scanner and the Custom Search client.

use std::num::ParseIntError;

use thiserror::Error;

/// Message returned to callers when the Custom Search quota is exhausted.
pub const RATE_LIMIT_MESSAGE: &str =
    "rate limit exceeded, see https://developers.google.com/custom-search/v1/overview#pricing";

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors that can abort a scan.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The remote search client could not be constructed.
    #[error("failed to initialize search client: {0}")]
    ClientInit(#[source] CseError),

    /// A page request failed for a reason other than rate limiting.
    #[error(transparent)]
    SearchRequest(#[from] CseError),

    /// The API answered with status 429.
    #[error("{}", RATE_LIMIT_MESSAGE)]
    RateLimit,

    /// The reported total result count was not an integer.
    #[error("invalid total result count {value:?}: {source}")]
    Parse {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors raised by a Custom Search client.
#[derive(Error, Debug)]
pub enum CseError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The API returned a non-success status.
    #[error("Custom Search API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Invalid response from Custom Search: {0}")]
    InvalidResponse(String),

    /// The client configuration was rejected.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

/// Errors that may carry an HTTP-like status code.
pub trait StatusCode {
    /// Returns the status code reported by the remote API, if any.
    fn status_code(&self) -> Option<u16>;
}

impl StatusCode for CseError {
    fn status_code(&self) -> Option<u16> {
        match self {
            CseError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
