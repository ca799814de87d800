//! Request fingerprint derivation
//!
//! Maps a [`RequestIdentity`] to a [`Fingerprint`] by hashing a canonical
//! byte encoding with SHA-256. Canonicalization sorts object keys at every
//! nesting level so logically identical JSON always hashes the same, no
//! matter how the caller's map happened to order its keys.

use crate::error::{Error, Result};
use crate::value_objects::{Fingerprint, FingerprintMode, RequestIdentity};
use serde_json::Value;
use sha2::{Digest, Sha256};

const AUTO_MODE_TAG: &[u8] = b"auto";
const PAYLOAD_MODE_TAG: &[u8] = b"payload";
const FIELD_SEPARATOR: u8 = 0;

/// Stateless fingerprint deriver
///
/// Deterministic and side-effect free. Fails only when the identity is
/// missing the fields its mode needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FingerprintDeriver {
    mode: FingerprintMode,
}

impl FingerprintDeriver {
    /// Create a deriver for the given mode
    pub fn new(mode: FingerprintMode) -> Self {
        Self { mode }
    }

    /// Mode this deriver hashes in
    pub fn mode(&self) -> FingerprintMode {
        self.mode
    }

    /// Derive the fingerprint of `identity`
    pub fn derive(&self, identity: &RequestIdentity) -> Result<Fingerprint> {
        let bytes = self.canonical_bytes(identity)?;
        Ok(Fingerprint::from_digest(&Sha256::digest(&bytes)))
    }

    /// Canonical byte encoding that gets hashed
    pub fn canonical_bytes(&self, identity: &RequestIdentity) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        match self.mode {
            FingerprintMode::Auto => {
                let path = identity
                    .path
                    .as_deref()
                    .filter(|p| !p.is_empty())
                    .ok_or_else(|| Error::invalid_input("Request path cannot be empty"))?;
                out.extend_from_slice(AUTO_MODE_TAG);
                out.push(FIELD_SEPARATOR);
                out.extend_from_slice(path.as_bytes());
                out.push(FIELD_SEPARATOR);
                write_canonical(&mut out, identity.body.as_ref().unwrap_or(&Value::Null))?;
            }
            FingerprintMode::Payload => {
                let payload = identity
                    .payload
                    .as_ref()
                    .filter(|p| !p.is_null())
                    .ok_or_else(|| Error::invalid_input("Payload cannot be empty"))?;
                out.extend_from_slice(PAYLOAD_MODE_TAG);
                out.push(FIELD_SEPARATOR);
                write_canonical(&mut out, payload)?;
            }
        }
        Ok(out)
    }
}

/// Write `value` as compact JSON with object keys in sorted order
fn write_canonical(out: &mut Vec<u8>, value: &Value) -> Result<()> {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
            out.push(b'{');
            for (i, (key, child)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                serde_json::to_writer(&mut *out, key)?;
                out.push(b':');
                write_canonical(out, child)?;
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, child) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_canonical(out, child)?;
            }
            out.push(b']');
        }
        scalar => serde_json::to_writer(&mut *out, scalar)?,
    }
    Ok(())
}
