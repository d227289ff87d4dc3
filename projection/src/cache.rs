//! Field cache port
//!
//! This module defines the external cache tier the projector shares field
//! selections through, plus the Redis-backed and in-memory implementations.
//! The projector imposes no TTL or invalidation contract here; eviction is
//! the store's concern.

use crate::fields::FieldSet;
use async_trait::async_trait;
use cache_system::{CacheError, CacheParams};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Port for the external field-selection cache, keyed by table name
#[async_trait]
pub trait FieldCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<FieldSet>, CacheError>;

    async fn put(&self, key: &str, fields: &FieldSet) -> Result<(), CacheError>;
}

/// External cache tier backed by the Redis cache manager
#[derive(Debug, Clone)]
pub struct RedisFieldCache {
    params: CacheParams,
}

impl RedisFieldCache {
    pub fn new(params: CacheParams) -> Self {
        Self { params }
    }
}

#[async_trait]
impl FieldCache for RedisFieldCache {
    async fn get(&self, key: &str) -> Result<Option<FieldSet>, CacheError> {
        self.params.manager.get_fields(&self.params.prefix, key).await
    }

    async fn put(&self, key: &str, fields: &FieldSet) -> Result<(), CacheError> {
        self.params
            .manager
            .set_fields(&self.params.prefix, key, fields, self.params.ttl)
            .await
    }
}

/// In-process field cache for tests and cache-less deployments
#[derive(Debug, Default)]
pub struct MemoryFieldCache {
    entries: RwLock<HashMap<String, FieldSet>>,
}

impl MemoryFieldCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FieldCache for MemoryFieldCache {
    async fn get(&self, key: &str) -> Result<Option<FieldSet>, CacheError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, fields: &FieldSet) -> Result<(), CacheError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), fields.clone());
        Ok(())
    }
}
