//! Convenience re-exports for common storefront gateway usage
//!
//! This prelude module re-exports the most commonly used items from the
//! gateway ecosystem, making it easier to import everything you need with a
//! single use statement.
//!
//! # Example
//!
//! ```rust
//! use storefront::prelude::*;
//!
//! // Now you have access to all the common gateway types and traits
//! ```

// Core gateway components
pub use crate::core::Storefront;
pub use crate::errors::StorefrontError;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, DatabaseConfig};

// Re-export commonly used projection types for convenience
pub use projection::prelude::*;

// Re-export projection module
pub use projection;

// Re-export cache system
pub use cache_system::prelude::*;

// Common external dependencies
pub use async_trait;
pub use sqlx;
pub use tokio;
