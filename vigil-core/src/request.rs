//! Validated poll request parameters

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default attempt budget when the caller does not specify one
pub const DEFAULT_MAX_ATTEMPTS: u32 = 15;

/// Default delay between attempts when the caller does not specify one
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Validated parameters for one poll operation.
///
/// A `PollRequest` can only be built through [`PollRequest::new`], so a
/// value existing at all proves the inputs passed validation. It is
/// immutable for the duration of the poll; nothing persists between
/// separate invocations.
#[derive(Debug, Clone)]
pub struct PollRequest {
    url: Url,
    max_attempts: u32,
    interval: Duration,
}

/// Rejected poll parameters.
///
/// Raised synchronously, before any network activity; a request that fails
/// validation never reaches the transport.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The URL failed to parse, or is not an http(s) URL with a host
    #[error("invalid URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The attempt budget must allow at least one status check
    #[error("invalid max attempts: {0} (must be at least 1)")]
    InvalidMaxAttempts(u32),

    /// The delay between attempts must be greater than zero
    #[error("invalid interval: {0:?} (must be greater than zero)")]
    InvalidInterval(Duration),
}

impl PollRequest {
    /// Validates the inputs and builds a request.
    ///
    /// A valid URL parses via [`url::Url`], uses the `http` or `https`
    /// scheme and names a host. This is stricter than a scheme-optional
    /// pattern match: `localhost:3000/status` is rejected because `Url`
    /// reads `localhost` as the scheme.
    pub fn new(
        url: &str,
        max_attempts: u32,
        interval: Duration,
    ) -> Result<Self, ValidationError> {
        let parsed = Url::parse(url).map_err(|e| ValidationError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme {:?}", parsed.scheme()),
            });
        }

        if parsed.host_str().is_none_or(str::is_empty) {
            return Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: "missing host".to_string(),
            });
        }

        if max_attempts == 0 {
            return Err(ValidationError::InvalidMaxAttempts(max_attempts));
        }

        if interval.is_zero() {
            return Err(ValidationError::InvalidInterval(interval));
        }

        Ok(Self {
            url: parsed,
            max_attempts,
            interval,
        })
    }

    /// The status endpoint to poll
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Maximum number of status checks before giving up
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay between consecutive status checks
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
