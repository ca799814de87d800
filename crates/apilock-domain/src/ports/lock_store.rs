//! Lock Store Port
//!
//! Port for the shared key-value store that arbitrates lock ownership.
//! Implementations exist for an in-process map and for Redis.
//!
//! ## Contract
//!
//! | Operation | Redis equivalent | Notes |
//! |-----------|------------------|-------|
//! | [`LockStore::ping`] | `PING` | must reply `PONG` when alive |
//! | [`LockStore::set_if_absent`] | `SET key value PX ttl NX` | single atomic call |
//! | [`LockStore::get`] | `GET key` | `None` when absent or expired |
//! | [`LockStore::expire`] | `PEXPIRE key ttl` | a zero TTL removes the key |

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Raw reply of a conditional set
///
/// Interpreted by the lock manager, not by providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionalSetReply {
    /// Key was absent and is now set
    Ok,
    /// Key already existed, nothing was written
    Exists,
    /// Any other reply the store produced
    Unrecognized(String),
}

/// Shared lock store interface
///
/// All mutual exclusion is delegated to the atomicity of
/// [`set_if_absent`](LockStore::set_if_absent). Implementations must never
/// emulate it with a read followed by a write.
#[async_trait]
pub trait LockStore: Send + Sync + std::fmt::Debug {
    /// Liveness probe
    ///
    /// Returns the store's reply, `"PONG"` when healthy. Stores that cannot
    /// be probed keep the default, which reports the capability as missing.
    async fn ping(&self) -> Result<String> {
        Err(Error::unsupported("PING"))
    }

    /// Store `value` under `key` with expiry `ttl`, only if `key` is absent
    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<ConditionalSetReply>;

    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Reset the expiry of `key`
    ///
    /// A zero `ttl` removes the key immediately. Returns whether the key
    /// existed.
    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool>;

    /// Name of this provider implementation (e.g. "memory", "redis")
    fn provider_name(&self) -> &str;
}
