//! # apilock
//!
//! Distributed, TTL-bounded mutual exclusion for idempotent request handling.
//!
//! Every request is reduced to a deterministic fingerprint. The first request
//! with a given fingerprint claims a lock record in a shared store and runs;
//! identical requests arriving while the record lives are rejected with a
//! "resource is busy" response. The record is removed when the response is
//! finished, or expires on its own if the process dies first.
//!
//! ## Example
//!
//! ```
//! use apilock::{GuardConfig, GuardedRun, LockStore, RequestGuard, RequestIdentity};
//! use apilock::providers::MemoryLockStore;
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store: Arc<dyn LockStore> = Arc::new(MemoryLockStore::new());
//! let guard = RequestGuard::new(Some(store), GuardConfig::default())
//!     .await
//!     .unwrap();
//!
//! let identity = RequestIdentity::request("/api/v1/user", json!({ "userID": 123 }));
//! let run = guard.run(&identity, async { "created" }).await.unwrap();
//! assert!(matches!(run, GuardedRun::Completed("created")));
//! # }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - fingerprints, lock keys, configuration, errors and the store port
//! - `application` - lock manager, request guard and provider registry
//! - `providers` - in-memory and Redis lock stores
//! - `infrastructure` - configuration loading, logging and bootstrap

/// Domain layer - core types
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use apilock_domain::*;
}

/// Application layer - guard, lock manager and registry
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use apilock_application::*;
}

/// Lock store providers
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use apilock_providers::lock_store::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use apilock_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the guard API at the crate root
pub use application::use_cases::{
    CompletionHook, GuardOutcome, GuardedRun, LockManager, RequestGuard,
};

// Re-export bootstrap entry points
pub use infrastructure::{AppConfig, ConfigLoader, build_request_guard};
