//! Root welcome handler.

use axum::Json;

use crate::http::types::RootResponse;

/// Welcome line returned by the root endpoint.
const WELCOME_MESSAGE: &str = "Welcome to hello-copilot FastAPI app!";

/// Summary of the available endpoints, with a usage example for `/sum`.
const ENDPOINT_SUMMARY: &str = "/health, /sum?a=1&b=2";

/// Root endpoint.
///
/// # Returns
///
/// Returns the fixed welcome message and the list of available endpoints.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse { message: WELCOME_MESSAGE, endpoints: ENDPOINT_SUMMARY })
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;

    /// Test the root endpoint payload.
    #[tokio::test]
    async fn test_root() {
        let response = root().await.into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let (_, body) = response.into_parts();
        let body_bytes = axum::body::to_bytes(body, usize::MAX).await.expect("read body");
        let json: serde_json::Value = serde_json::from_slice(&body_bytes).expect("parse JSON");

        assert_eq!(
            json,
            serde_json::json!({
                "message": "Welcome to hello-copilot FastAPI app!",
                "endpoints": "/health, /sum?a=1&b=2"
            })
        );
    }
}
