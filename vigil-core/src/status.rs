//! Status payload types

use serde::{Deserialize, Serialize};

/// Payload returned by a status endpoint on each poll.
///
/// Structure shared between the poller (classifies) and the mock server
/// (serves). Only the `status` field carries meaning for the poll loop;
/// every other field passes through verbatim and is handed back to the
/// caller inside the final outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPayload {
    /// Reported job status, e.g. "completed", "pending" or "error"
    pub status: String,

    /// Additional fields reported by the endpoint, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl StatusPayload {
    /// Creates a payload carrying only a status string
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            extra: serde_json::Map::new(),
        }
    }

    /// Classifies the reported status for the poll loop.
    ///
    /// Matching is exact and case-sensitive: anything other than
    /// `"completed"` or `"error"` — including `"pending"` and values the
    /// poller has never heard of — is inconclusive and costs an attempt.
    pub fn kind(&self) -> StatusKind {
        match self.status.as_str() {
            "completed" => StatusKind::Completed,
            "error" => StatusKind::Error,
            _ => StatusKind::Inconclusive,
        }
    }
}

/// Classification of a reported status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// The job finished; the poll ends with the payload
    Completed,
    /// The job failed at the application level; the poll ends with the payload
    Error,
    /// Not conclusive yet; the poll retries until the budget runs out
    Inconclusive,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert_eq!(StatusPayload::new("completed").kind(), StatusKind::Completed);
        assert_eq!(StatusPayload::new("error").kind(), StatusKind::Error);
        assert_eq!(StatusPayload::new("pending").kind(), StatusKind::Inconclusive);
        assert_eq!(StatusPayload::new("queued").kind(), StatusKind::Inconclusive);
        assert_eq!(StatusPayload::new("").kind(), StatusKind::Inconclusive);
    }

    #[test]
    fn test_classification_is_case_sensitive() {
        assert_eq!(StatusPayload::new("Completed").kind(), StatusKind::Inconclusive);
        assert_eq!(StatusPayload::new("ERROR").kind(), StatusKind::Inconclusive);
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let payload: StatusPayload =
            serde_json::from_str(r#"{"status":"completed","job_id":"abc-123","progress":100}"#)
                .unwrap();

        assert_eq!(payload.status, "completed");
        assert_eq!(payload.extra["job_id"], "abc-123");
        assert_eq!(payload.extra["progress"], 100);

        let round_tripped = serde_json::to_value(&payload).unwrap();
        assert_eq!(round_tripped["job_id"], "abc-123");
    }
}
