//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the request guard.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via Figment |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extensions for foreign errors |
//! | [`bootstrap`] | Building a ready-to-use guard from configuration |
//! | [`constants`] | Centralized configuration constants |

// Force linkme registration of every bundled lock store provider
extern crate apilock_providers;

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Re-export commonly used types
pub use bootstrap::{build_request_guard, resolve_lock_store};
pub use config::{AppConfig, ConfigBuilder, ConfigLoader};
pub use error_ext::ErrorContext;
