//! # Axum Helpers
//!
//! Utilities and middleware shared by Axum services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: structured `{status, message}` error responses
//! - **[`extractors`]**: custom extractors (UUID path parameters)
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorResponse};

// Re-export extractors
pub use extractors::UuidPath;

// Re-export HTTP middleware
pub use http::{cors_layer_from_env, security_headers};

// Re-export server types
pub use server::{create_app, create_router, health_router, shutdown_signal, HealthResponse};
