//! HTTP layer: route table, API types, and query-parameter validation.

pub mod handlers;
pub mod routes;
pub mod types;
pub mod validation;

pub use routes::build_router;
pub use validation::ValidatedQuery;
