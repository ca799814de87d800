//! Lock Store Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`MemoryLockStore`] | Local | Process-local map with per-key expiry |
//! | [`RedisLockStore`] | Distributed | Redis-backed for multi-instance |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: Use `MemoryLockStore`
//! - **Multi Instance**: Use `RedisLockStore`; a memory store only excludes
//!   duplicates within one process

#[cfg(feature = "store-memory")]
pub mod memory;
#[cfg(feature = "store-redis")]
pub mod redis;

#[cfg(feature = "store-memory")]
pub use memory::MemoryLockStore;
#[cfg(feature = "store-redis")]
pub use redis::RedisLockStore;
