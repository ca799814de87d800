//! Main application configuration

use super::{LoggingConfig, StoreConfig};
use apilock_domain::GuardConfig;
use serde::{Deserialize, Serialize};

/// Root configuration
///
/// Every section falls back to its defaults, so a file may set only the
/// keys it cares about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Request guard behaviour
    pub guard: GuardConfig,

    /// Shared lock store
    pub store: StoreConfig,

    /// Logging
    pub logging: LoggingConfig,
}
