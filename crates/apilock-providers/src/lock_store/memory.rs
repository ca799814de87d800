//! In-memory lock store provider
//!
//! Process-local implementation of [`LockStore`] on top of a concurrent map.
//! The conditional set goes through the map's entry API, which holds the
//! shard lock for the whole check-and-insert, so it is atomic per key.
//! Expired records are treated as absent. A key that is read or written again
//! is purged on that access; abandoned keys are swept every
//! [`MEMORY_PURGE_INTERVAL`] conditional sets.
//!
//! ## Example
//!
//! ```
//! use apilock_providers::lock_store::MemoryLockStore;
//!
//! let store = MemoryLockStore::new();
//! assert!(store.is_empty());
//! ```

use crate::constants::MEMORY_PURGE_INTERVAL;
use apilock_domain::constants::PING_REPLY_ALIVE;
use apilock_domain::error::{Error, Result};
use apilock_domain::ports::{ConditionalSetReply, LockStore};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug, Clone)]
struct StoredValue {
    value: String,
    expires_at: Instant,
}

impl StoredValue {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

/// Process-local lock store
///
/// Clones share the same map. Only excludes duplicates inside a single
/// process.
#[derive(Debug, Clone, Default)]
pub struct MemoryLockStore {
    entries: Arc<DashMap<String, StoredValue>>,
    writes: Arc<AtomicU64>,
}

impl MemoryLockStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.iter().filter(|e| e.is_live(now)).count()
    }

    /// Whether no live record exists
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every expired record, returning how many were removed
    pub fn purge_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, v| v.is_live(now));
        before.saturating_sub(self.entries.len())
    }

    /// Sweep expired records once every `MEMORY_PURGE_INTERVAL` writes
    fn maybe_purge(&self) {
        let writes = self.writes.fetch_add(1, Ordering::Relaxed) + 1;
        if writes % MEMORY_PURGE_INTERVAL == 0 {
            let removed = self.purge_expired();
            if removed > 0 {
                debug!(removed, "Purged expired in-memory locks");
            }
        }
    }

    fn deadline(now: Instant, ttl: Duration) -> Result<Instant> {
        now.checked_add(ttl)
            .ok_or_else(|| Error::store(format!("Lock TTL {ttl:?} is out of range")))
    }
}

#[async_trait]
impl LockStore for MemoryLockStore {
    async fn ping(&self) -> Result<String> {
        Ok(PING_REPLY_ALIVE.to_string())
    }

    async fn set_if_absent(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> Result<ConditionalSetReply> {
        let now = Instant::now();
        let stored = StoredValue {
            value: value.to_string(),
            expires_at: Self::deadline(now, ttl)?,
        };

        // Must run before the entry guard is taken: retain locks every shard.
        self.maybe_purge();

        match self.entries.entry(key.to_string()) {
            Entry::Occupied(entry) if entry.get().is_live(now) => Ok(ConditionalSetReply::Exists),
            Entry::Occupied(mut entry) => {
                entry.insert(stored);
                Ok(ConditionalSetReply::Ok)
            }
            Entry::Vacant(entry) => {
                entry.insert(stored);
                Ok(ConditionalSetReply::Ok)
            }
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let now = Instant::now();
        if let Some(entry) = self.entries.get(key) {
            if entry.is_live(now) {
                return Ok(Some(entry.value.clone()));
            }
        }
        self.entries.remove_if(key, |_, v| !v.is_live(now));
        Ok(None)
    }

    async fn expire(&self, key: &str, ttl: Duration) -> Result<bool> {
        let now = Instant::now();
        if ttl.is_zero() {
            return Ok(self
                .entries
                .remove(key)
                .is_some_and(|(_, v)| v.is_live(now)));
        }

        let deadline = Self::deadline(now, ttl)?;
        if let Some(mut entry) = self.entries.get_mut(key) {
            if entry.is_live(now) {
                entry.expires_at = deadline;
                return Ok(true);
            }
        }
        self.entries.remove_if(key, |_, v| !v.is_live(now));
        Ok(false)
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

use apilock_application::ports::registry::{
    LOCK_STORE_PROVIDERS, LockStoreProviderConfig, LockStoreProviderEntry,
};

/// Factory function for creating in-memory lock store instances.
fn memory_lock_store_factory(
    _config: &LockStoreProviderConfig,
) -> std::result::Result<Arc<dyn LockStore>, String> {
    Ok(Arc::new(MemoryLockStore::new()))
}

#[linkme::distributed_slice(LOCK_STORE_PROVIDERS)]
static MEMORY_PROVIDER: LockStoreProviderEntry = LockStoreProviderEntry {
    name: "memory",
    description: "Process-local in-memory lock store",
    factory: memory_lock_store_factory,
};
