//! Use Cases
//!
//! Application services implementing the lock protocol.

pub mod completion;
pub mod lock_manager;
pub mod request_guard;

pub use completion::CompletionHook;
pub use lock_manager::LockManager;
pub use request_guard::{GuardOutcome, GuardedRun, RequestGuard};
