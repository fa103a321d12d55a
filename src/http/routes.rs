//! HTTP routing configuration for all API endpoints.

use axum::{routing::get, Router};

use crate::http::handlers::*;

/// Build the Axum router with all API endpoints.
///
/// The table is constructed once at startup and never mutated afterwards;
/// unknown paths and methods fall through to the framework's 404/405.
///
/// # Returns
///
/// Returns the configured Axum `Router` with the `/`, `/health`, and `/sum`
/// endpoints.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/sum", get(sum))
}
