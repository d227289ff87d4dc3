//! Convenience re-exports for common projection usage

// Core projector and field model
pub use crate::fields::{FieldRef, FieldSet};
pub use crate::projector::FieldProjector;
pub use crate::static_fields::{AttributeTable, EntityKind};
pub use crate::translation::TranslatedEntity;

// Context and ports
pub use crate::cache::{FieldCache, MemoryFieldCache, RedisFieldCache};
pub use crate::context::ShopContext;
pub use crate::introspect::{PgSchemaIntrospector, SchemaIntrospector};

// Error types
pub use crate::errors::{ProjectionError, SchemaError};

// Query building
pub use crate::query_builder::{QueryBuilder, SqlGenerator};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::PgPool;
