//! Lock Manager Use Case
//!
//! Owns the acquire/release protocol against the shared [`LockStore`].
//! Holds no mutable state; every call is a single store round trip.

use apilock_domain::constants::{LOCK_SENTINEL_VALUE, PING_REPLY_ALIVE};
use apilock_domain::error::{Error, Result};
use apilock_domain::{AcquisitionOutcome, ConditionalSetReply, LockKey, LockStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Lock protocol over a shared store
#[derive(Clone, Debug)]
pub struct LockManager {
    store: Arc<dyn LockStore>,
}

impl LockManager {
    /// Create a lock manager on top of `store`
    pub fn new(store: Arc<dyn LockStore>) -> Self {
        Self { store }
    }

    /// Underlying store
    pub fn store(&self) -> &Arc<dyn LockStore> {
        &self.store
    }

    /// Verify the store is reachable and answers its liveness probe
    ///
    /// Never silenced: a guard that cannot reach its store cannot promise
    /// anything.
    pub async fn connectivity_check(&self) -> Result<()> {
        match self.store.ping().await {
            Ok(reply) if reply == PING_REPLY_ALIVE => {
                debug!(provider = self.store.provider_name(), "Lock store is alive");
                Ok(())
            }
            Ok(reply) => Err(Error::connectivity(format!(
                "Store connection error: unexpected liveness reply '{reply}'"
            ))),
            Err(Error::Unsupported { .. }) => Err(Error::config(
                "First argument should be a valid store client with a liveness probe",
            )),
            Err(e) => Err(Error::connectivity_with_source("Store connection error", e)),
        }
    }

    /// Try to create the lock record for `key`
    ///
    /// Exactly one atomic conditional set; the store decides who was first.
    pub async fn try_acquire(&self, key: &LockKey, ttl: Duration) -> Result<AcquisitionOutcome> {
        if ttl.is_zero() {
            return Err(Error::config("Lock TTL must be greater than 0"));
        }

        let reply = self
            .store
            .set_if_absent(key.as_str(), LOCK_SENTINEL_VALUE, ttl)
            .await?;

        match reply {
            ConditionalSetReply::Ok => {
                debug!(key = %key, ttl = ?ttl, "Lock acquired");
                Ok(AcquisitionOutcome::Acquired)
            }
            ConditionalSetReply::Exists => {
                debug!(key = %key, "Lock already held");
                Ok(AcquisitionOutcome::Duplicate)
            }
            ConditionalSetReply::Unrecognized(reply) => Err(Error::store(format!(
                "Unexpected reply '{reply}' from store while setting the lock for {key}"
            ))),
        }
    }

    /// Whether a lock record currently exists for `key`
    pub async fn is_locked(&self, key: &LockKey) -> Result<bool> {
        let value = self.store.get(key.as_str()).await?;
        Ok(value.as_deref() == Some(LOCK_SENTINEL_VALUE))
    }

    /// Remove the lock record for `key` immediately
    ///
    /// Idempotent: releasing an absent or expired key succeeds.
    pub async fn release(&self, key: &LockKey) -> Result<()> {
        let existed = self.store.expire(key.as_str(), Duration::ZERO).await?;
        debug!(key = %key, existed, "Lock released");
        Ok(())
    }
}
