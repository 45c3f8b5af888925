/*
[INPUT]:  Error sources (transport, HTTP status, serialization, input validation)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

/// Main error type for the Tryminex adapter
#[derive(Error, Debug)]
pub enum TryminexError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request exceeded its timeout
    #[error("Request timeout after {timeout:?}")]
    Timeout { timeout: Duration },

    /// Server answered with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Response body was not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Trading pair is not in `BASE/QUOTE` form
    #[error("Invalid symbol {0:?}: expected BASE/QUOTE")]
    InvalidSymbol(String),

    /// Signed endpoint called on a client without credentials
    #[error("Credentials required for signed endpoint")]
    MissingCredentials,

    /// Response did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TryminexError {
    /// Check if the error is worth retrying by the caller
    pub fn is_retryable(&self) -> bool {
        match self {
            TryminexError::Http(_) | TryminexError::Timeout { .. } => true,
            TryminexError::Status { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            _ => false,
        }
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            TryminexError::MissingCredentials => true,
            TryminexError::Status { status, .. } => {
                *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
            }
            _ => false,
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TryminexError::Status { status, .. } => Some(*status),
            TryminexError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Create a status error from a response status and body
    pub fn status_error(status: StatusCode, body: impl Into<String>) -> Self {
        TryminexError::Status {
            status,
            body: body.into(),
        }
    }
}

/// Result type alias for Tryminex operations
pub type Result<T> = std::result::Result<T, TryminexError>;
