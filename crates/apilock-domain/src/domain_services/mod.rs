//! Domain Services
//!
//! Pure, stateless domain logic.

/// Request fingerprint derivation
pub mod fingerprint;

pub use fingerprint::FingerprintDeriver;
