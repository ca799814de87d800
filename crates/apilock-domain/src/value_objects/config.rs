//! Guard configuration value objects

use crate::constants::{
    DEFAULT_BUSY_MESSAGE, DEFAULT_KEY_PREFIX, DEFAULT_LOCK_TTL_MS, MAX_LOCK_TTL_MS,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which part of a [`RequestIdentity`](crate::RequestIdentity) is fingerprinted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerprintMode {
    /// Derive from request path and body
    #[default]
    Auto,
    /// Derive from the explicit payload only
    Payload,
}

/// Per-guard configuration
///
/// Supplied once at guard construction and never mutated afterwards.
///
/// # Example
///
/// ```
/// use apilock_domain::GuardConfig;
///
/// let config = GuardConfig::default()
///     .with_ttl_ms(5_000)
///     .with_silent(true)
///     .with_key_prefix("orders-");
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Lock lifetime in milliseconds if never released explicitly
    pub ttl_ms: u64,
    /// Swallow store errors during requests instead of propagating them
    pub silent: bool,
    /// Namespace prepended to every fingerprint
    pub key_prefix: String,
    /// Message surfaced to duplicate requests
    pub busy_message: String,
    /// Fingerprint derivation mode
    pub fingerprint_mode: FingerprintMode,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            ttl_ms: DEFAULT_LOCK_TTL_MS,
            silent: false,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            busy_message: DEFAULT_BUSY_MESSAGE.to_string(),
            fingerprint_mode: FingerprintMode::Auto,
        }
    }
}

impl GuardConfig {
    /// Set the lock lifetime in milliseconds
    pub fn with_ttl_ms(mut self, ttl_ms: u64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    /// Set the lock lifetime
    pub fn with_ttl(self, ttl: Duration) -> Self {
        self.with_ttl_ms(u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX))
    }

    /// Enable or disable silent mode
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Set the key namespace
    pub fn with_key_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Set the duplicate rejection message
    pub fn with_busy_message<S: Into<String>>(mut self, message: S) -> Self {
        self.busy_message = message.into();
        self
    }

    /// Set the fingerprint derivation mode
    pub fn with_fingerprint_mode(mut self, mode: FingerprintMode) -> Self {
        self.fingerprint_mode = mode;
        self
    }

    /// Lock lifetime as a [`Duration`]
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }

    /// Reject settings no guard can operate with
    pub fn validate(&self) -> Result<()> {
        if self.ttl_ms == 0 {
            return Err(Error::config("Lock TTL must be greater than 0"));
        }
        if self.ttl_ms > MAX_LOCK_TTL_MS {
            return Err(Error::config(format!(
                "Lock TTL cannot exceed {MAX_LOCK_TTL_MS} ms, got {}",
                self.ttl_ms
            )));
        }
        if self.key_prefix.is_empty() {
            return Err(Error::config("Lock key prefix cannot be empty"));
        }
        if self.busy_message.is_empty() {
            return Err(Error::config("Busy message cannot be empty"));
        }
        Ok(())
    }
}
