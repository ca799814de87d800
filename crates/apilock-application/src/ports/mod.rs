//! Application Ports
//!
//! Registry through which store providers make themselves discoverable.

pub mod registry;

pub use registry::{
    LOCK_STORE_PROVIDERS, LockStoreProviderConfig, LockStoreProviderEntry,
    list_lock_store_providers, resolve_lock_store_provider,
};
