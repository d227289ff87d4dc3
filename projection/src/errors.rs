use thiserror::Error;

/// Schema catalog errors
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Schema catalog error: {0}")]
    Catalog(#[from] sqlx::Error),
}

/// Field projection errors
#[derive(Error, Debug)]
pub enum ProjectionError {
    #[error("Schema introspection failed: {0}")]
    Schema(#[from] SchemaError),

    #[error("Field cache error: {0}")]
    Cache(#[from] cache_system::CacheError),

    #[error("Duplicate join alias: {0}")]
    DuplicateJoinAlias(String),
}
