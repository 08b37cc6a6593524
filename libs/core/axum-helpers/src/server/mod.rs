//! Server infrastructure module.
//!
//! Provides router assembly with OpenAPI documentation, the liveness
//! endpoint, and graceful shutdown.

pub mod app;
pub mod health;
pub mod shutdown;

// Re-export commonly used types and functions
pub use app::{create_app, create_router};
pub use health::{health_router, HealthResponse};
pub use shutdown::shutdown_signal;
