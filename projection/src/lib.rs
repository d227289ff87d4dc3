//! Projection - Field selection core for the storefront gateway
//!
//! This crate builds the column selections and translation joins storefront
//! queries are assembled from: hardcoded per-entity field lists, dynamically
//! discovered attribute-table columns behind a two-tier cache, and
//! language-fallback joins against the shared translation table.

pub mod cache;
pub mod context;
pub mod errors;
pub mod fields;
pub mod introspect;
pub mod prelude;
pub mod projector;
pub mod query_builder;
pub mod static_fields;
pub mod translation;

#[cfg(test)]
mod projector_tests;

pub use cache::{FieldCache, MemoryFieldCache, RedisFieldCache};
pub use context::ShopContext;
pub use errors::{ProjectionError, SchemaError};
pub use fields::{FieldRef, FieldSet};
pub use introspect::{PgSchemaIntrospector, SchemaIntrospector};
pub use projector::FieldProjector;
pub use query_builder::{JoinClause, JoinCondition, JoinType, QueryBuilder};
pub use static_fields::{AttributeTable, EntityKind};
pub use translation::TranslatedEntity;
