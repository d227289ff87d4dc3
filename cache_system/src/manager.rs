//! Cache manager implementation
//!
//! This module provides the main CacheManager struct
//! for Redis operations and connection management.

use crate::errors::CacheError;
use config::CacheConfig;
use redis::{AsyncCommands, Client};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Redis-based cache manager
///
/// Stores serialized field selections keyed by table name so that schema
/// introspection results can be shared across processes.
#[derive(Clone)]
pub struct CacheManager {
    client: Arc<Client>,
    config: Arc<CacheConfig>,
    connection_pool: Arc<RwLock<Option<redis::aio::MultiplexedConnection>>>,
}

impl Debug for CacheManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let connection_status = {
            match self.connection_pool.try_read() {
                Ok(pool) => {
                    if pool.is_some() {
                        "connected"
                    } else {
                        "no_connection"
                    }
                }
                Err(_) => "lock_error",
            }
        };

        f.debug_struct("CacheManager")
            .field("config", &self.config)
            .field("connected", &connection_status)
            .finish()
    }
}

impl CacheManager {
    /// Create a new cache manager
    pub fn new(config: CacheConfig) -> Result<Self, CacheError> {
        let client = Client::open(config.redis_url.as_str())?;

        Ok(Self {
            client: Arc::new(client),
            config: Arc::new(config),
            connection_pool: Arc::new(RwLock::new(None)),
        })
    }

    /// Get or create Redis connection
    async fn get_connection(&self) -> Result<redis::aio::MultiplexedConnection, CacheError> {
        let mut pool = self.connection_pool.write().await;

        if pool.is_none() {
            let connection = self.client.get_multiplexed_async_connection().await?;
            *pool = Some(connection);
        }

        // Safe extraction: we just ensured pool contains a connection above
        Ok(pool
            .as_ref()
            .ok_or_else(|| CacheError::Connection("Failed to get connection from pool".into()))?
            .clone())
    }

    /// Generate cache key for a table's field selection
    fn build_fields_key(&self, prefix: &str, table_name: &str) -> String {
        format!("{}:{}:fields", prefix, table_name)
    }

    /// Get a table's field selection from cache
    pub async fn get_fields<T>(
        &self,
        prefix: &str,
        table_name: &str,
    ) -> Result<Option<T>, CacheError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let cache_key = self.build_fields_key(prefix, table_name);
        let mut conn = self.get_connection().await?;

        let cached_data: Option<String> = conn.get(&cache_key).await?;

        match cached_data {
            Some(json_str) => {
                let value: T = serde_json::from_str(&json_str)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Store a table's field selection in cache with a TTL
    pub async fn set_fields<T>(
        &self,
        prefix: &str,
        table_name: &str,
        value: &T,
        ttl: u64,
    ) -> Result<(), CacheError>
    where
        T: Serialize,
    {
        let cache_key = self.build_fields_key(prefix, table_name);
        let json_str = serde_json::to_string(value)?;
        let mut conn = self.get_connection().await?;

        let _: () = conn.set_ex(&cache_key, &json_str, ttl).await?;
        Ok(())
    }

    /// Delete a table's cached field selection
    pub async fn delete_fields(
        &self,
        prefix: &str,
        table_name: &str,
    ) -> Result<bool, CacheError> {
        let cache_key = self.build_fields_key(prefix, table_name);
        let mut conn = self.get_connection().await?;

        let deleted: i32 = conn.del(&cache_key).await?;
        Ok(deleted > 0)
    }

    /// Check if a field selection is cached for a table
    pub async fn fields_exist(
        &self,
        prefix: &str,
        table_name: &str,
    ) -> Result<bool, CacheError> {
        let cache_key = self.build_fields_key(prefix, table_name);
        let mut conn = self.get_connection().await?;

        let exists: bool = conn.exists(&cache_key).await?;
        Ok(exists)
    }

    /// Get TTL for a cached field selection
    pub async fn fields_ttl(
        &self,
        prefix: &str,
        table_name: &str,
    ) -> Result<i64, CacheError> {
        let cache_key = self.build_fields_key(prefix, table_name);
        let mut conn = self.get_connection().await?;

        let ttl: i64 = conn.ttl(&cache_key).await?;
        Ok(ttl)
    }

    /// Ping Redis to check connectivity
    pub async fn ping(&self) -> Result<String, CacheError> {
        let mut conn = self.get_connection().await?;

        let pong: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(pong)
    }

    /// Get current configuration
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }
}
