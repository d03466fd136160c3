//! Poll loop
//!
//! Drives bounded, fixed-interval status checks against an endpoint until
//! the job reports a conclusive status or the attempt budget runs out.
//! Attempts are strictly sequential; the task suspends between them
//! without blocking a thread, so independent polls can share a runtime.

use std::sync::Arc;
use std::time::Duration;

use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use vigil_core::{PollOutcome, PollRequest, StatusKind};

use crate::StatusClient;
use crate::error::PollError;
use crate::observer::{PollObserver, TracingObserver};
use crate::source::StatusSource;

/// Drives poll operations against status endpoints.
///
/// Each call to [`poll_until_complete`](JobPoller::poll_until_complete)
/// owns its own attempt counter and timer, so one poller can serve several
/// concurrent polls; only the cancellation token is shared, and cancelling
/// it aborts all of them.
pub struct JobPoller<S = StatusClient> {
    source: S,
    observer: Arc<dyn PollObserver>,
    cancel: CancellationToken,
}

impl JobPoller<StatusClient> {
    /// Creates a poller backed by a fresh HTTP client
    pub fn new() -> Self {
        Self::with_source(StatusClient::new())
    }
}

impl Default for JobPoller<StatusClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StatusSource> JobPoller<S> {
    /// Creates a poller over any status source
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            observer: Arc::new(TracingObserver),
            cancel: CancellationToken::new(),
        }
    }

    /// Replaces the progress observer
    pub fn with_observer(mut self, observer: Arc<dyn PollObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Token that aborts polls driven by this poller.
    ///
    /// Cancellation takes effect mid-sleep as well as mid-attempt, and a
    /// poll started from an already-cancelled token returns before issuing
    /// a single request.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Polls the request's URL until the job completes, fails, or the
    /// attempt budget runs out.
    ///
    /// Only inconclusive application statuses are retried. A transport
    /// failure (unreachable endpoint, non-success HTTP status, malformed
    /// body) stops the poll immediately and is surfaced to the caller with
    /// the URL and attempt number attached.
    pub async fn poll_until_complete(
        &self,
        request: &PollRequest,
    ) -> Result<PollOutcome, PollError> {
        let max_attempts = request.max_attempts();
        let mut attempts = 0u32;

        while attempts < max_attempts {
            self.observer.on_attempt(attempts + 1, max_attempts);

            let payload = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    return Err(self.cancelled(request, attempts + 1));
                }
                result = self.source.fetch_status(request.url()) => {
                    result.map_err(|source| {
                        self.observer.on_transport_failure(attempts + 1, &source);
                        PollError::Transport {
                            url: request.url().to_string(),
                            attempt: attempts + 1,
                            source,
                        }
                    })?
                }
            };

            match payload.kind() {
                StatusKind::Completed => {
                    self.observer.on_completed(attempts + 1);
                    return Ok(PollOutcome::Completed(payload));
                }
                StatusKind::Error => {
                    self.observer.on_job_failed(attempts + 1);
                    return Ok(PollOutcome::Errored(payload));
                }
                StatusKind::Inconclusive => {
                    attempts += 1;
                    if attempts == max_attempts {
                        break;
                    }

                    // Sleep strictly between attempts, never after the last one.
                    self.observer.on_retry(attempts, request.interval());
                    tokio::select! {
                        biased;
                        _ = self.cancel.cancelled() => {
                            return Err(self.cancelled(request, attempts));
                        }
                        _ = time::sleep(request.interval()) => {}
                    }
                }
            }
        }

        self.observer.on_exhausted(attempts);
        Ok(PollOutcome::Exhausted { attempts })
    }

    fn cancelled(&self, request: &PollRequest, attempt: u32) -> PollError {
        debug!("Poll of {} cancelled at attempt {}", request.url(), attempt);
        PollError::Cancelled {
            url: request.url().to_string(),
            attempt,
        }
    }
}

/// Polls `url` with a default poller.
///
/// Validates the inputs synchronously (nothing touches the network when
/// validation fails), then drives the loop with a fresh HTTP client and
/// the tracing observer. See [`JobPoller`] for custom sources, observers
/// and cancellation.
pub async fn poll_until_complete(
    url: &str,
    max_attempts: u32,
    interval: Duration,
) -> Result<PollOutcome, PollError> {
    let request = PollRequest::new(url, max_attempts, interval)?;
    JobPoller::new().poll_until_complete(&request).await
}
