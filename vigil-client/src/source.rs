//! Status source seam
//!
//! The poll loop needs exactly one capability from the transport: perform a
//! status check against a URL and return a parsed payload or fail. Putting
//! that behind a trait keeps the loop independent of reqwest and lets tests
//! script response sequences without a network.

use async_trait::async_trait;
use url::Url;
use vigil_core::StatusPayload;

use crate::StatusClient;
use crate::error::Result;

/// A source of job status reports
///
/// Implementations must be safe to call concurrently; the poller holds no
/// lock around status checks.
#[async_trait]
pub trait StatusSource: Send + Sync {
    /// Performs one status check against `url`
    async fn fetch_status(&self, url: &Url) -> Result<StatusPayload>;
}

#[async_trait]
impl StatusSource for StatusClient {
    async fn fetch_status(&self, url: &Url) -> Result<StatusPayload> {
        self.get_status(url).await
    }
}
