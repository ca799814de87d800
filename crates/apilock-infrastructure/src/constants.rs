//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "apilock.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "apilock";

/// Environment variable prefix for configuration (`APILOCK__GUARD__TTL_MS`)
pub const CONFIG_ENV_PREFIX: &str = "APILOCK";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// Lock store provider used when none is configured
pub const DEFAULT_STORE_PROVIDER: &str = "memory";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "APILOCK_LOG";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 5;

/// File name prefix used when the configured log path has none
pub const DEFAULT_LOG_FILE_PREFIX: &str = "apilock";
