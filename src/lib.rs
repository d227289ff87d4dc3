//! # Storefront
//!
//! A storefront database gateway for PostgreSQL providing dynamic field
//! projection, translation joins, and two-tier field caching.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use storefront::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let storefront = Storefront::new(config).await?;
//!
//!     let projector = storefront.field_projector();
//!
//!     // Project the full product selection: static columns plus the
//!     // dynamically discovered attribute-table columns.
//!     let mut query = QueryBuilder::new();
//!     query.add_select_columns(projector.entity_fields(EntityKind::Product).await?.render());
//!
//!     // Attach translation joins for a language sub shop.
//!     let context = ShopContext::sub_shop(2, 1);
//!     projector.attach_translation(&mut query, TranslatedEntity::Product, &context)?;
//!
//!     println!("SELECT {}", query.build_select_clause());
//!     println!("{}", query.build_join_clause());
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod prelude;

// Re-export the main public types for convenience
pub use core::Storefront;
pub use errors::StorefrontError;

// Re-export centralized config
pub use config::{AppConfig, CacheConfig, DatabaseConfig};

// Re-export internal crates used by the public API
pub use cache_system;
pub use projection;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
