//! Lock store configuration types

use crate::constants::DEFAULT_STORE_PROVIDER;
use apilock_application::ports::registry::LockStoreProviderConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lock store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Registered provider name ("memory", "redis")
    pub provider: String,

    /// Connection URI for distributed stores
    pub uri: Option<String>,

    /// Provider-specific options passed through untouched
    pub options: HashMap<String, String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORE_PROVIDER.to_string(),
            uri: None,
            options: HashMap::new(),
        }
    }
}

impl StoreConfig {
    /// Registry configuration for this store
    pub fn provider_config(&self) -> LockStoreProviderConfig {
        let mut config = LockStoreProviderConfig::new(&self.provider);
        if let Some(uri) = &self.uri {
            config = config.with_uri(uri);
        }
        for (key, value) in &self.options {
            config = config.with_extra(key, value);
        }
        config
    }
}
