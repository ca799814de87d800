//! Configuration management
//!
//! Figment-based loading of guard, store and logging settings from
//! defaults, a TOML file and `APILOCK__` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
