//! `FlagCache` implementation over the shared Redis pool.
//!
//! Keys are written with `SET ... EX`, so setting an existing flag refreshes its expiry.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use feed_core::error::DomainError;
use feed_core::traits::{FlagCache, RepoResult};

use crate::pool::{RedisPool, RedisPoolError};

fn map_cache_error(e: RedisPoolError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

/// Redis-backed flag store
#[derive(Clone, Debug)]
pub struct RedisFlagCache {
    pool: RedisPool,
}

impl RedisFlagCache {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FlagCache for RedisFlagCache {
    #[instrument(skip(self))]
    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> RepoResult<()> {
        self.pool
            .set_with_ttl(key, value, ttl)
            .await
            .map_err(map_cache_error)?;
        debug!("Flag set");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get(&self, key: &str) -> RepoResult<Option<String>> {
        self.pool.get_string(key).await.map_err(map_cache_error)
    }

    #[instrument(skip(self))]
    async fn delete(&self, key: &str) -> RepoResult<bool> {
        self.pool.delete(key).await.map_err(map_cache_error)
    }

    async fn ping(&self) -> RepoResult<()> {
        self.pool.health_check().await.map_err(map_cache_error)
    }
}
