//! Terminal poll outcomes

use serde::{Deserialize, Serialize};

use crate::status::StatusPayload;

/// Terminal outcome of a poll operation.
///
/// Conclusive outcomes carry the final payload reported by the endpoint;
/// exhaustion carries only the number of attempts spent. Exhaustion is an
/// ordinary outcome, not an error: the monitored job may well finish later,
/// the poller just stopped watching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PollOutcome {
    /// The endpoint reported `"completed"`
    Completed(StatusPayload),

    /// The endpoint reported `"error"` — an application-level failure,
    /// distinct from a transport failure
    Errored(StatusPayload),

    /// The attempt budget ran out without a conclusive status
    Exhausted {
        /// Number of status checks performed before giving up
        attempts: u32,
    },
}

impl PollOutcome {
    /// Whether the endpoint reached a conclusive status before the budget
    /// ran out
    pub fn is_conclusive(&self) -> bool {
        matches!(self, Self::Completed(_) | Self::Errored(_))
    }

    /// The final payload, if the outcome was conclusive
    pub fn payload(&self) -> Option<&StatusPayload> {
        match self {
            Self::Completed(payload) | Self::Errored(payload) => Some(payload),
            Self::Exhausted { .. } => None,
        }
    }
}
