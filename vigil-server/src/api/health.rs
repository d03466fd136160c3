//! Health Check API Handler

use axum::{http::StatusCode, response::IntoResponse};

/// GET /health
/// Liveness probe; always succeeds while the server runs
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
