//! # Axum Helpers
//!
//! Utilities shared by the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`response`]**: the uniform `ApiResponse` envelope returned by every endpoint
//! - **[`errors`]**: `AppError` with envelope-based HTTP responses
//! - **[`extractors`]**: validated JSON request bodies
//! - **[`server`]**: router assembly, server startup, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod response;
pub mod server;

// Re-export commonly used types
pub use errors::AppError;
pub use extractors::ValidatedJson;
pub use response::ApiResponse;
pub use server::{create_app, create_router, health_router, shutdown_signal, HealthResponse};
