//! Core storefront gateway functionality
//!
//! This module contains the main Storefront struct and its implementation,
//! wiring the database pool and the field cache into ready-to-use field
//! projectors.

use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;

use crate::errors::StorefrontError;
use cache_system::{CacheManager, CacheParams};
use config::{AppConfig, DatabaseConfig};
use projection::{
    FieldCache, FieldProjector, MemoryFieldCache, PgSchemaIntrospector, RedisFieldCache,
};

/// Main gateway coordinator that manages the database connection and the
/// shared field cache
pub struct Storefront {
    pool: PgPool,
    cache: Option<Arc<CacheManager>>,
}

impl Storefront {
    /// Create a new gateway with database connection and Redis field cache
    pub async fn new(config: AppConfig) -> Result<Self, StorefrontError> {
        let pool = Self::connect(&config.database).await?;
        let cache = Arc::new(CacheManager::new(config.cache)?);

        Ok(Self {
            pool,
            cache: Some(cache),
        })
    }

    /// Create a new gateway without an external cache tier.
    ///
    /// Attribute field selections are still memoized per process, but not
    /// shared across processes.
    pub async fn without_cache(config: DatabaseConfig) -> Result<Self, StorefrontError> {
        let pool = Self::connect(&config).await?;

        Ok(Self { pool, cache: None })
    }

    async fn connect(config: &DatabaseConfig) -> Result<PgPool, StorefrontError> {
        let connection_string = config.connection_string();

        let mut pool_options = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        // Set max lifetime if specified
        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        Ok(pool_options.connect(&connection_string).await?)
    }

    /// Get database pool reference
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the external cache manager, if configured
    pub fn cache(&self) -> Option<&Arc<CacheManager>> {
        self.cache.as_ref()
    }

    /// Build a field projector over this gateway's pool and cache
    pub fn field_projector(&self) -> FieldProjector {
        let introspector = Arc::new(PgSchemaIntrospector::new(self.pool.clone()));

        let cache: Arc<dyn FieldCache> = match &self.cache {
            Some(manager) => Arc::new(RedisFieldCache::new(CacheParams::from_manager(
                manager.clone(),
            ))),
            None => Arc::new(MemoryFieldCache::new()),
        };

        FieldProjector::new(introspector, cache)
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), StorefrontError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }
}
