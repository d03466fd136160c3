//! API Module
//!
//! HTTP layer for the mock status server.

pub mod health;
pub mod status;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Create the router with all endpoints
pub fn create_router() -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Randomized job status
        .route("/status", get(status::job_status))
        // Middleware
        .layer(TraceLayer::new_for_http())
}
