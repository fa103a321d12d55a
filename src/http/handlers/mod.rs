//! HTTP handlers for different API endpoints.

pub mod health;
pub mod root;
pub mod sum;

// Re-export handlers for easier access
pub use health::health;
pub use root::root;
pub use sum::sum;
