//! Provider constants

/// Redis URI used when none is configured
pub const REDIS_DEFAULT_URI: &str = "redis://127.0.0.1:6379";

/// Timeout for establishing the Redis connection in seconds
pub const REDIS_CONNECT_TIMEOUT_SECS: u64 = 2;

/// Conditional sets between two sweeps of expired in-memory records
pub const MEMORY_PURGE_INTERVAL: u64 = 256;
