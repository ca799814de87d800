//! Environment variable configuration tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p apilock-infrastructure --test unit config_figment -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Tests use `unsafe` blocks for `env::set_var`/`env::remove_var` because
//! Rust 2024 edition requires this for environment variable mutations.

use apilock_infrastructure::config::ConfigLoader;
use std::env;
use std::time::Duration;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_nested_env_vars_are_loaded() {
    set_env("APILOCK__GUARD__TTL_MS", "2500");
    set_env("APILOCK__GUARD__SILENT", "true");
    set_env("APILOCK__STORE__PROVIDER", "redis");

    let config = ConfigLoader::new().load().expect("Should load config");

    assert_eq!(config.guard.ttl(), Duration::from_millis(2500));
    assert!(config.guard.silent);
    assert_eq!(config.store.provider, "redis");

    remove_env("APILOCK__GUARD__TTL_MS");
    remove_env("APILOCK__GUARD__SILENT");
    remove_env("APILOCK__STORE__PROVIDER");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_is_ignored() {
    set_env("APILOCK_GUARD_TTL_MS", "10");

    let config = ConfigLoader::new().load().expect("Should load config");
    assert_eq!(config.guard.ttl_ms, 60_000);

    remove_env("APILOCK_GUARD_TTL_MS");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_invalid_env_value_fails_fast() {
    set_env("APILOCK__GUARD__TTL_MS", "soon");

    let result = ConfigLoader::new().load();
    assert!(result.is_err());

    remove_env("APILOCK__GUARD__TTL_MS");
}
