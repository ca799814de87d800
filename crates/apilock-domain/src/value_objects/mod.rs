//! Domain Value Objects
//!
//! Immutable value objects describing a lock attempt. Value objects are
//! defined by their attributes and compared by value.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Fingerprint`] | Hex digest identifying a logical request |
//! | [`LockKey`] | Namespaced store key derived from a fingerprint |
//! | [`RequestIdentity`] | Path, body and payload a fingerprint is derived from |
//! | [`GuardConfig`] | Immutable per-guard settings |
//! | [`AcquisitionOutcome`] | Result of a single acquisition attempt |
//! | [`DuplicateRejection`] | What a collaborator reports for a duplicate |

/// Guard configuration value objects
pub mod config;
/// Fingerprint and lock key value objects
pub mod fingerprint;
/// Request identity value objects
pub mod identity;
/// Acquisition outcome value objects
pub mod outcome;

// Re-export commonly used value objects
pub use config::{FingerprintMode, GuardConfig};
pub use fingerprint::{Fingerprint, LockKey};
pub use identity::RequestIdentity;
pub use outcome::{AcquisitionOutcome, DuplicateRejection};
