//! Provider Registry System
//!
//! Uses the `linkme` crate for compile-time registration of lock store
//! providers that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = redis" → RedisLockStore      │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use apilock_application::ports::registry::{LockStoreProviderConfig, resolve_lock_store_provider};
//!
//! let config = LockStoreProviderConfig::new("redis").with_uri("redis://127.0.0.1:6379");
//! let store = resolve_lock_store_provider(&config)?;
//! ```

pub mod lock_store;

pub use lock_store::{
    LOCK_STORE_PROVIDERS, LockStoreProviderConfig, LockStoreProviderEntry,
    list_lock_store_providers, resolve_lock_store_provider,
};
