/*
[INPUT]:  Error sources (HTTP transport, non-2xx statuses, serialization, URLs)
[OUTPUT]: Structured error type with not-found and retry hints
[POS]:    Error handling layer - unified error type for the adapter crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the customer API client
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connect, timeout, body read)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered 404 for a single resource
    #[error("customer {id} not found")]
    NotFound { id: u64 },

    /// Any other non-2xx response
    #[error("API error (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// The requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ApiError::NotFound { .. } | ApiError::Status { status: 404, .. }
        )
    }

    /// Check if the user may reasonably try the same call again
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::Http(_) | ApiError::InvalidResponse(_) => true,
            ApiError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }

    /// Create a status error from a response status and body text
    pub fn status_error(status: StatusCode, message: impl Into<String>) -> Self {
        ApiError::Status {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for customer API operations
pub type Result<T> = std::result::Result<T, ApiError>;
