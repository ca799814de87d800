//! Fingerprint and lock key value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Deterministic digest identifying a logical request
///
/// Only meaningful for equality comparison. Built by
/// [`FingerprintDeriver`](crate::FingerprintDeriver).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }

    /// Hex representation of the digest
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key under which a lock record lives in the shared store
///
/// The configured namespace prefix followed by the fingerprint. Never
/// mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LockKey(String);

impl LockKey {
    /// Build the key for `fingerprint` inside `prefix`
    pub fn new(prefix: &str, fingerprint: &Fingerprint) -> Self {
        Self(format!("{prefix}{fingerprint}"))
    }

    /// Raw store key
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LockKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LockKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
