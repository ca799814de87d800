//! Completion hook
//!
//! Handed out for every acquired execution. Consuming it with
//! [`CompletionHook::complete`] releases the lock; dropping it unfired
//! (panic, early return, cancelled task) schedules the release on the
//! current tokio runtime instead.

use crate::use_cases::lock_manager::LockManager;
use apilock_domain::LockKey;
use apilock_domain::error::Result;
use tracing::warn;

/// Fire-once release handle for an acquired lock
#[derive(Debug)]
#[must_use = "call `complete` once the response is finished to release the lock"]
pub struct CompletionHook {
    manager: LockManager,
    key: LockKey,
    silent: bool,
    fired: bool,
}

impl CompletionHook {
    pub(crate) fn new(manager: LockManager, key: LockKey, silent: bool) -> Self {
        Self {
            manager,
            key,
            silent,
            fired: false,
        }
    }

    /// Key of the lock this hook releases
    pub fn key(&self) -> &LockKey {
        &self.key
    }

    /// Release the lock now that the response is finalized
    ///
    /// Store failures propagate unless the guard is silent, in which case
    /// the record is left to expire.
    pub async fn complete(mut self) -> Result<()> {
        let result = self.manager.release(&self.key).await;
        self.fired = true;

        match result {
            Err(e) if self.silent && e.is_silenceable() => {
                warn!(key = %self.key, error = %e, "Lock release failed, record left to expire");
                Ok(())
            }
            other => other,
        }
    }
}

impl Drop for CompletionHook {
    fn drop(&mut self) {
        if self.fired {
            return;
        }
        self.fired = true;

        let manager = self.manager.clone();
        let key = self.key.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(e) = manager.release(&key).await {
                        warn!(key = %key, error = %e, "Background lock release failed");
                    }
                });
            }
            Err(_) => {
                warn!(key = %self.key, "No async runtime to release lock, record left to expire");
            }
        }
    }
}
