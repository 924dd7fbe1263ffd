//! MongoDB database connector and utilities
//!
//! Provides startup bootstrap (probe-then-attach), configuration, and
//! health checks.

mod config;
mod connector;
mod health;

pub use config::MongoConfig;
pub use connector::{connect, error_code, probe, MongoError};
pub use health::{check_health, check_health_detailed, HealthStatus};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
