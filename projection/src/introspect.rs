//! Schema introspection
//!
//! This module defines the schema catalog port and its Postgres
//! implementation. A missing table is a configuration error surfaced to the
//! caller, not a runtime condition to recover from.

use crate::errors::SchemaError;
use async_trait::async_trait;
use sqlx::PgPool;

/// Port for listing the columns of a table
#[async_trait]
pub trait SchemaIntrospector: Send + Sync {
    /// List the column names of `table_name`, ordered as the schema catalog
    /// reports them
    async fn columns_of(&self, table_name: &str) -> Result<Vec<String>, SchemaError>;
}

/// Schema introspector backed by the Postgres information schema
#[derive(Debug, Clone)]
pub struct PgSchemaIntrospector {
    pool: PgPool,
}

impl PgSchemaIntrospector {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SchemaIntrospector for PgSchemaIntrospector {
    async fn columns_of(&self, table_name: &str) -> Result<Vec<String>, SchemaError> {
        let columns: Vec<String> = sqlx::query_scalar(
            "SELECT column_name FROM information_schema.columns
             WHERE table_schema = current_schema() AND table_name = $1
             ORDER BY ordinal_position",
        )
        .bind(table_name)
        .fetch_all(&self.pool)
        .await?;

        // A table without columns does not exist in Postgres
        if columns.is_empty() {
            return Err(SchemaError::UnknownTable(table_name.to_string()));
        }

        Ok(columns)
    }
}
