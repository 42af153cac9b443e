//! Flag storage backed by Redis.

mod redis_flag_cache;

pub use redis_flag_cache::RedisFlagCache;
