//! # feed-cache
//!
//! Redis layer for short-lived feed state.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Flag Store**: `FlagCache` implementation used for unread-reply markers
//!
//! ## Example
//!
//! ```ignore
//! use feed_cache::{RedisFlagCache, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let flags = RedisFlagCache::new(pool);
//!
//! flags.set_with_expiry("community_comment_unread:u1:ch1", "true", ttl).await?;
//! ```

pub mod flags;
pub mod pool;

pub use flags::RedisFlagCache;
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
