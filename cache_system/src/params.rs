//! Cache parameter configuration
//!
//! This module defines the CacheParams struct
//! for configuring cache behavior and TTL settings.

use crate::CacheManager;
use std::sync::Arc;

/// Cache parameters for configuring cache behavior per consumer
#[derive(Debug, Clone)]
pub struct CacheParams {
    /// The cache manager instance
    pub manager: Arc<CacheManager>,
    /// TTL for cached entries in seconds
    pub ttl: u64,
    /// Prefix for cache keys
    pub prefix: String,
}

impl CacheParams {
    pub fn new(manager: Arc<CacheManager>, ttl: u64, prefix: &str) -> Self {
        Self {
            ttl,
            prefix: prefix.to_string(),
            manager,
        }
    }

    /// Parameters using the manager's configured default TTL and key prefix
    pub fn from_manager(manager: Arc<CacheManager>) -> Self {
        let ttl = manager.config().default_ttl;
        let prefix = manager.config().key_prefix.clone();

        Self {
            manager,
            ttl,
            prefix,
        }
    }
}
