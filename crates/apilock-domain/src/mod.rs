//! # Domain Layer
//!
//! Core types for request-level mutual exclusion: request fingerprints,
//! lock keys, acquisition outcomes, guard configuration and the port that
//! every shared lock store must implement.
//!
//! ## Architecture
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`value_objects`] | Immutable value objects (fingerprint, lock key, config) |
//! | [`domain_services`] | Pure domain logic (fingerprint derivation) |
//! | [`ports`] | Interfaces implemented by store providers |
//! | [`constants`] | Domain constants and protocol sentinels |
//! | [`error`] | Domain error types |
//!
//! ## Example
//!
//! ```
//! use apilock_domain::{FingerprintDeriver, FingerprintMode, RequestIdentity};
//! use serde_json::json;
//!
//! let deriver = FingerprintDeriver::new(FingerprintMode::Auto);
//! let identity = RequestIdentity::request("/api/v1/user", json!({ "userID": 123 }));
//! let fingerprint = deriver.derive(&identity).unwrap();
//! assert_eq!(fingerprint.as_str().len(), 64);
//! ```

/// Domain-level constants
pub mod constants;
/// Pure domain services
pub mod domain_services;
/// Domain error types
pub mod error;
/// Ports implemented by providers
pub mod ports;
/// Immutable value objects
pub mod value_objects;

// Re-export commonly used types for convenience
pub use constants::*;
pub use domain_services::FingerprintDeriver;
pub use error::{Error, Result};
pub use ports::{ConditionalSetReply, LockStore};
pub use value_objects::*;
