//! # hello-copilot Library
//!
//! A library for the hello-copilot HTTP service: a welcome page, a health
//! check, and an integer sum computed from query parameters.
//!
//! This library provides components for:
//! - **Route Table**: A fixed, stateless axum router over the three endpoints
//! - **Typed Query Validation**: A declarative schema step that rejects
//!   missing or non-integer parameters with a structured 422 response
//! - **API Types**: Serializable request/response payloads
//!
//! # Examples
//!
//! ```no_run
//! use hello_copilot_rs::http::build_router;
//!
//! # async fn example() -> std::io::Result<()> {
//! // Build the HTTP router and serve it
//! let app = build_router();
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

pub mod http;

// Re-export commonly used types for convenience
pub use http::build_router;
pub use http::types::{HealthResponse, RootResponse, SumParams, SumResponse};
pub use http::validation::{ValidatedQuery, ValidationRejection, Violation, ViolationKind};
