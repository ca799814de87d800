//! Guard bootstrap
//!
//! ```text
//! AppConfig → StoreConfig → linkme registry → Arc<dyn LockStore> → RequestGuard
//! ```

use crate::config::{AppConfig, StoreConfig};
use apilock_application::ports::registry::resolve_lock_store_provider;
use apilock_application::use_cases::RequestGuard;
use apilock_domain::LockStore;
use apilock_domain::error::{Error, Result};
use std::sync::Arc;
use tracing::info;

/// Resolve the configured lock store from the provider registry
///
/// Only builds the client; no connection is attempted.
pub fn resolve_lock_store(config: &StoreConfig) -> Result<Arc<dyn LockStore>> {
    resolve_lock_store_provider(&config.provider_config())
        .map_err(|e| Error::config(format!("Failed to resolve lock store provider: {e}")))
}

/// Build a request guard from loaded configuration
///
/// Resolves the store, then probes it once through [`RequestGuard::new`].
pub async fn build_request_guard(config: &AppConfig) -> Result<RequestGuard> {
    let store = resolve_lock_store(&config.store)?;
    info!(provider = %config.store.provider, "Lock store resolved");

    RequestGuard::new(Some(store), config.guard.clone()).await
}
