//! Lock Store Provider Registry
//!
//! Auto-registration system for lock store providers. Providers register
//! themselves into [`LOCK_STORE_PROVIDERS`] and are resolved by name.

use std::collections::HashMap;
use std::sync::Arc;

use apilock_domain::LockStore;

/// Configuration for lock store provider creation
///
/// Providers use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct LockStoreProviderConfig {
    /// Provider name (e.g., "memory", "redis")
    pub provider: String,
    /// Connection URI (for distributed stores)
    pub uri: Option<String>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl LockStoreProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the URI
    pub fn with_uri(mut self, uri: impl Into<String>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for lock store providers
pub struct LockStoreProviderEntry {
    /// Unique provider name (e.g., "memory", "redis")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&LockStoreProviderConfig) -> Result<Arc<dyn LockStore>, String>,
}

#[linkme::distributed_slice]
pub static LOCK_STORE_PROVIDERS: [LockStoreProviderEntry] = [..];

/// Resolve lock store provider by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn LockStore>)` - Created provider instance
/// * `Err(String)` - Error message if provider not found or creation failed
pub fn resolve_lock_store_provider(
    config: &LockStoreProviderConfig,
) -> Result<Arc<dyn LockStore>, String> {
    if let Some(entry) = LOCK_STORE_PROVIDERS
        .iter()
        .find(|entry| entry.name == config.provider)
    {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = LOCK_STORE_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown lock store provider '{}'. Available providers: {:?}",
        config.provider, available
    ))
}

/// List all registered lock store providers as (name, description) pairs
pub fn list_lock_store_providers() -> Vec<(&'static str, &'static str)> {
    LOCK_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
