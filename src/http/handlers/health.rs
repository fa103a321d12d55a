//! Health check handler.

use axum::Json;

use crate::http::types::HealthResponse;

/// Health check endpoint.
///
/// # Returns
///
/// Returns `{"status": "ok"}` while the server is up; there is no degraded
/// state to report.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
