//! Field projector
//!
//! The projector owns the static per-entity selections and the two-tier
//! attribute-column cache: an in-process memo in front of the shared
//! external cache, falling through to schema introspection. Once a table's
//! selection is populated in either tier it is treated as immutable for the
//! process lifetime.

use crate::cache::FieldCache;
use crate::errors::ProjectionError;
use crate::fields::{FieldRef, FieldSet};
use crate::introspect::SchemaIntrospector;
use crate::static_fields::EntityKind;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Builds column selections and translation joins for storefront queries
pub struct FieldProjector {
    introspector: Arc<dyn SchemaIntrospector>,
    cache: Arc<dyn FieldCache>,
    attribute_fields: RwLock<HashMap<String, FieldSet>>,
}

impl std::fmt::Debug for FieldProjector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let memoized = match self.attribute_fields.try_read() {
            Ok(memo) => memo.len(),
            Err(_) => 0,
        };

        f.debug_struct("FieldProjector")
            .field("memoized_tables", &memoized)
            .finish()
    }
}

impl FieldProjector {
    pub fn new(introspector: Arc<dyn SchemaIntrospector>, cache: Arc<dyn FieldCache>) -> Self {
        Self {
            introspector,
            cache,
            attribute_fields: RwLock::new(HashMap::new()),
        }
    }

    /// The hardcoded field selection for an entity
    pub fn static_fields(&self, kind: EntityKind) -> FieldSet {
        kind.static_fields()
    }

    /// The field selection for an attribute table, discovered via schema
    /// introspection and cached in both tiers.
    ///
    /// Callers must pass the same alias on every call for a given table;
    /// memo and cache hits return the selection as first populated without
    /// re-validating the alias. At most one introspection round trip is
    /// made per table name per cache population.
    pub async fn attribute_fields(
        &self,
        table_name: &str,
        alias: &str,
    ) -> Result<FieldSet, ProjectionError> {
        if let Some(fields) = self.attribute_fields.read().await.get(table_name) {
            return Ok(fields.clone());
        }

        if let Some(fields) = self.cache.get(table_name).await? {
            tracing::trace!(table = table_name, "attribute fields served from cache");
            self.memoize(table_name, fields.clone()).await;
            return Ok(fields);
        }

        let columns = self.introspector.columns_of(table_name).await?;
        tracing::debug!(
            table = table_name,
            columns = columns.len(),
            "attribute fields populated from schema catalog"
        );

        let fields: FieldSet = columns
            .iter()
            .map(|column| FieldRef::new(alias, column))
            .collect();

        self.cache.put(table_name, &fields).await?;
        self.memoize(table_name, fields.clone()).await;

        Ok(fields)
    }

    /// The complete field selection for an entity: static fields first,
    /// then the attribute-table fields, preserving each internal order
    pub async fn entity_fields(&self, kind: EntityKind) -> Result<FieldSet, ProjectionError> {
        let mut fields = kind.static_fields();

        if let Some(attribute) = kind.attribute_table() {
            fields.extend(
                self.attribute_fields(attribute.table, attribute.alias)
                    .await?,
            );
        }

        Ok(fields)
    }

    // Concurrent population races are benign: the selection is derived
    // deterministically from the schema, so last write wins.
    async fn memoize(&self, table_name: &str, fields: FieldSet) {
        self.attribute_fields
            .write()
            .await
            .insert(table_name.to_string(), fields);
    }
}
