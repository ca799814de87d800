//! Request Guard Use Case
//!
//! Per-request entry point: derive the fingerprint, attempt acquisition and
//! translate the result into something the HTTP collaborator can act on.

use crate::use_cases::completion::CompletionHook;
use crate::use_cases::lock_manager::LockManager;
use apilock_domain::error::{Error, Result};
use apilock_domain::{
    AcquisitionOutcome, DuplicateRejection, FingerprintDeriver, GuardConfig, LockKey, LockStore,
    RequestIdentity,
};
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{error, info, warn};

/// What the collaborator must do with a request
#[derive(Debug)]
pub enum GuardOutcome {
    /// First request for this fingerprint: run the guarded logic, then
    /// complete the hook when the response is finished
    Acquired(CompletionHook),
    /// Lock already held: skip the guarded logic and report the rejection
    Duplicate(DuplicateRejection),
    /// Silent mode swallowed a store failure: proceed without exclusivity,
    /// nothing to release
    Unguarded,
}

impl GuardOutcome {
    /// Acquisition result, if the store answered
    pub fn acquisition(&self) -> Option<AcquisitionOutcome> {
        match self {
            Self::Acquired(_) => Some(AcquisitionOutcome::Acquired),
            Self::Duplicate(_) => Some(AcquisitionOutcome::Duplicate),
            Self::Unguarded => None,
        }
    }

    /// Whether the guarded logic may run
    pub fn may_proceed(&self) -> bool {
        !matches!(self, Self::Duplicate(_))
    }
}

/// Result of [`RequestGuard::run`]
#[derive(Debug)]
pub enum GuardedRun<T> {
    /// The guarded logic ran to completion
    Completed(T),
    /// The request was a duplicate, nothing ran
    Rejected(DuplicateRejection),
}

/// Idempotency guard for request handling
///
/// Cheap to clone and safe to share across tasks. Holds only the immutable
/// configuration and a handle on the store.
#[derive(Clone, Debug)]
pub struct RequestGuard {
    manager: LockManager,
    config: Arc<GuardConfig>,
    deriver: FingerprintDeriver,
}

impl RequestGuard {
    /// Build a guard, probing the store once
    ///
    /// Validation completes before any store I/O. Fails when the store is
    /// missing, cannot be probed, or does not answer.
    pub async fn new(store: Option<Arc<dyn LockStore>>, config: GuardConfig) -> Result<Self> {
        let store = store.ok_or_else(|| Error::config("Argument store client is required"))?;
        config.validate()?;

        let manager = LockManager::new(store);
        if let Err(e) = manager.connectivity_check().await {
            error!(provider = manager.store().provider_name(), error = %e, "Lock store check failed");
            return Err(e);
        }

        info!(
            provider = manager.store().provider_name(),
            ttl_ms = config.ttl_ms,
            silent = config.silent,
            "Request guard initialized"
        );

        Ok(Self {
            manager,
            deriver: FingerprintDeriver::new(config.fingerprint_mode),
            config: Arc::new(config),
        })
    }

    /// Guard configuration
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Lock manager used by this guard
    pub fn manager(&self) -> &LockManager {
        &self.manager
    }

    /// Store key a request with `identity` locks
    pub fn lock_key(&self, identity: &RequestIdentity) -> Result<LockKey> {
        let fingerprint = self.deriver.derive(identity)?;
        Ok(LockKey::new(&self.config.key_prefix, &fingerprint))
    }

    /// Attempt to claim exclusive processing of `identity`
    pub async fn guard(&self, identity: &RequestIdentity) -> Result<GuardOutcome> {
        let key = self.lock_key(identity)?;

        match self.manager.try_acquire(&key, self.config.ttl()).await {
            Ok(AcquisitionOutcome::Acquired) => Ok(GuardOutcome::Acquired(CompletionHook::new(
                self.manager.clone(),
                key,
                self.config.silent,
            ))),
            Ok(AcquisitionOutcome::Duplicate) => Ok(GuardOutcome::Duplicate(
                DuplicateRejection::new(key, self.config.busy_message.as_str()),
            )),
            Err(e) if self.config.silent && e.is_silenceable() => {
                warn!(key = %key, error = %e, "Lock store failed, proceeding unguarded");
                Ok(GuardOutcome::Unguarded)
            }
            Err(e) => Err(e),
        }
    }

    /// Run `work` under the guard
    ///
    /// `work` is only polled when the request may proceed. The lock is
    /// released after `work` finishes, including when it panics; the panic
    /// is resumed afterwards.
    pub async fn run<F, T>(&self, identity: &RequestIdentity, work: F) -> Result<GuardedRun<T>>
    where
        F: Future<Output = T>,
    {
        let hook = match self.guard(identity).await? {
            GuardOutcome::Acquired(hook) => Some(hook),
            GuardOutcome::Duplicate(rejection) => return Ok(GuardedRun::Rejected(rejection)),
            GuardOutcome::Unguarded => None,
        };

        let result = AssertUnwindSafe(work).catch_unwind().await;

        match result {
            Ok(value) => {
                if let Some(hook) = hook {
                    hook.complete().await?;
                }
                Ok(GuardedRun::Completed(value))
            }
            Err(panic) => {
                if let Some(hook) = hook {
                    if let Err(e) = hook.complete().await {
                        warn!(error = %e, "Lock release after panic failed");
                    }
                }
                std::panic::resume_unwind(panic)
            }
        }
    }
}
