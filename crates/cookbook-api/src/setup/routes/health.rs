//! Health check endpoint.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

/// Liveness response body.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
}

/// Service liveness probe. Returns a static body without touching the
/// database.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthStatus {
        status: "API is running".to_string(),
    })
}
