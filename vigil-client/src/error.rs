//! Error types for the vigil client

use thiserror::Error;
use vigil_core::ValidationError;

/// Result type alias for transport operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised by the HTTP transport
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed before a usable response arrived
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code
    #[error("endpoint returned status {status}: {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        message: String,
    },

    /// The response body did not match the expected payload shape
    #[error("failed to parse response: {0}")]
    ParseError(String),
}

impl ClientError {
    /// Create an API error from status code and body text
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiError { status, .. } if *status >= 500)
    }
}

/// Errors that end a poll operation without producing an outcome.
///
/// Exhaustion is deliberately absent: running out of attempts is an
/// expected terminal result and is reported as
/// [`PollOutcome::Exhausted`](vigil_core::PollOutcome::Exhausted).
#[derive(Debug, Error)]
pub enum PollError {
    /// The request was rejected before any network activity
    #[error(transparent)]
    Invalid(#[from] ValidationError),

    /// The transport failed; the poll stops immediately instead of retrying
    #[error("transport failure polling {url} (attempt {attempt}): {source}")]
    Transport {
        url: String,
        attempt: u32,
        #[source]
        source: ClientError,
    },

    /// The poll was cancelled mid-attempt or mid-sleep
    #[error("poll of {url} cancelled at attempt {attempt}")]
    Cancelled { url: String, attempt: u32 },
}
