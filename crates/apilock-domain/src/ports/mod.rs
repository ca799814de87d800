//! Domain Ports
//!
//! Interfaces the domain expects from the outside world.

/// Shared lock store port
pub mod lock_store;

pub use lock_store::{ConditionalSetReply, LockStore};
