//! Error types for the storefront crate
//!
//! This module contains all error types that can be returned by gateway
//! operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Database connection error: {0}")]
    DatabaseConnection(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Cache error: {0}")]
    Cache(#[from] cache_system::CacheError),

    #[error("Projection error: {0}")]
    Projection(#[from] projection::ProjectionError),
}
