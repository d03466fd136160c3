//! Status API Handler
//!
//! The one endpoint the poller exercises: a randomized job status report.

use axum::{Json, http::StatusCode};
use rand::Rng;
use vigil_core::StatusPayload;

/// Status drawn by the mock endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportedStatus {
    Completed,
    Pending,
    Error,
}

impl ReportedStatus {
    /// Uniform three-way draw
    fn draw<R: Rng>(rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => Self::Completed,
            1 => Self::Pending,
            _ => Self::Error,
        }
    }
}

/// GET /status
/// Report a randomly drawn job status
pub async fn job_status() -> (StatusCode, Json<StatusPayload>) {
    let reported = ReportedStatus::draw(&mut rand::thread_rng());
    tracing::info!("New status request: {:?}", reported);
    respond(reported)
}

/// Map a drawn status to its exact HTTP pairing.
///
/// The pairing is part of the endpoint contract: 200 `completed`,
/// 202 `pending`, 500 `error`.
fn respond(reported: ReportedStatus) -> (StatusCode, Json<StatusPayload>) {
    match reported {
        ReportedStatus::Completed => (StatusCode::OK, Json(StatusPayload::new("completed"))),
        ReportedStatus::Pending => (StatusCode::ACCEPTED, Json(StatusPayload::new("pending"))),
        ReportedStatus::Error => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(StatusPayload::new("error")),
        ),
    }
}
