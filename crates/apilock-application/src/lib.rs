//! Application Layer - apilock
//!
//! Implements the lock protocol on top of the domain's [`LockStore`] port:
//! acquisition through a single atomic conditional set, release by zeroing
//! the record's expiry, and a completion hook that releases only when the
//! current execution was the acquirer.
//!
//! ## Use Cases
//!
//! - [`LockManager`]: connectivity check, acquire, test, release
//! - [`RequestGuard`]: per-request guard built from a store and a config
//! - [`CompletionHook`]: fire-once release handle for acquired executions
//!
//! ## Ports
//!
//! - `ports::registry`: name-based registry of lock store providers
//!
//! ## Dependencies
//!
//! This crate depends only on `apilock-domain` and pure async libraries.
//!
//! [`LockStore`]: apilock_domain::LockStore

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
