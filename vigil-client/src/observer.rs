//! Poll progress observers
//!
//! Progress notifications are advisory instrumentation, not part of the
//! poll contract. They are modeled as a pluggable observer rather than
//! fixed console writes so that each consumer picks its own sink; the
//! default reports through `tracing`.

use std::time::Duration;

use tracing::{debug, error, info, warn};

use crate::error::ClientError;

/// Observer invoked at each poll transition.
///
/// All methods have empty defaults, so implementations override only the
/// transitions they care about. The poller calls these synchronously
/// between attempts; implementations should return quickly.
pub trait PollObserver: Send + Sync {
    /// A status check is about to be issued
    fn on_attempt(&self, _attempt: u32, _max_attempts: u32) {}

    /// The last check was inconclusive; the next one runs after `delay`
    fn on_retry(&self, _attempt: u32, _delay: Duration) {}

    /// The endpoint reported completion
    fn on_completed(&self, _attempts: u32) {}

    /// The endpoint reported an application-level failure
    fn on_job_failed(&self, _attempts: u32) {}

    /// The attempt budget ran out without a conclusive status
    fn on_exhausted(&self, _attempts: u32) {}

    /// The transport failed and the poll is stopping
    fn on_transport_failure(&self, _attempt: u32, _error: &ClientError) {}
}

/// Default observer that reports transitions through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl PollObserver for TracingObserver {
    fn on_attempt(&self, attempt: u32, max_attempts: u32) {
        debug!("Checking job status (attempt {}/{})", attempt, max_attempts);
    }

    fn on_retry(&self, attempt: u32, delay: Duration) {
        info!(
            "Job still pending after attempt {}, retrying in {:?}",
            attempt, delay
        );
    }

    fn on_completed(&self, attempts: u32) {
        info!("Job completed successfully after {} attempt(s)", attempts);
    }

    fn on_job_failed(&self, attempts: u32) {
        error!("Job failed after {} attempt(s)", attempts);
    }

    fn on_exhausted(&self, attempts: u32) {
        warn!(
            "Max attempts ({}) reached, job status remains pending",
            attempts
        );
    }

    fn on_transport_failure(&self, attempt: u32, error: &ClientError) {
        error!("Transport failure on attempt {}: {}", attempt, error);
    }
}
