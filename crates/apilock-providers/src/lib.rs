//! # apilock - Provider Implementations
//!
//! Lock store implementations of the [`LockStore`] port defined in
//! `apilock-domain`.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Lock Store | `LockStore` | Memory, Redis |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! apilock-providers = { version = "0.1", default-features = false, features = ["store-redis"] }
//! ```

// Re-export apilock-domain types commonly used with providers
pub use apilock_domain::error::{Error, Result};
pub use apilock_domain::ports::{ConditionalSetReply, LockStore};

/// Provider-specific constants
pub mod constants;

/// Lock store implementations
///
/// Implements `LockStore` for shared lock backends.
pub mod lock_store;
