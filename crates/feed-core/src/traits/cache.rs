//! Key/value flag store port

use std::time::Duration;

use async_trait::async_trait;

use super::RepoResult;

/// Shared key/value store used for short-lived boolean markers.
///
/// `get` returns `Ok(None)` for a missing key so callers can tell "not set"
/// apart from a failed lookup.
#[async_trait]
pub trait FlagCache: Send + Sync {
    async fn set_with_expiry(&self, key: &str, value: &str, ttl: Duration) -> RepoResult<()>;

    async fn get(&self, key: &str) -> RepoResult<Option<String>>;

    /// Returns whether a key was removed
    async fn delete(&self, key: &str) -> RepoResult<bool>;

    async fn ping(&self) -> RepoResult<()>;
}
