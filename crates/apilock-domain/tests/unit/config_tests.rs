//! Unit tests for guard configuration

use apilock_domain::{
    DEFAULT_BUSY_MESSAGE, DEFAULT_KEY_PREFIX, DEFAULT_LOCK_TTL_MS, Error, FingerprintMode,
    GuardConfig, MAX_LOCK_TTL_MS,
};
use std::time::Duration;

#[test]
fn test_defaults() {
    let config = GuardConfig::default();

    assert_eq!(config.ttl_ms, DEFAULT_LOCK_TTL_MS);
    assert_eq!(config.ttl(), Duration::from_secs(60));
    assert!(!config.silent);
    assert_eq!(config.key_prefix, DEFAULT_KEY_PREFIX);
    assert_eq!(config.busy_message, DEFAULT_BUSY_MESSAGE);
    assert_eq!(config.fingerprint_mode, FingerprintMode::Auto);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_methods() {
    let config = GuardConfig::default()
        .with_ttl(Duration::from_millis(1500))
        .with_silent(true)
        .with_key_prefix("orders:")
        .with_busy_message("Try again later")
        .with_fingerprint_mode(FingerprintMode::Payload);

    assert_eq!(config.ttl_ms, 1500);
    assert!(config.silent);
    assert_eq!(config.key_prefix, "orders:");
    assert_eq!(config.busy_message, "Try again later");
    assert_eq!(config.fingerprint_mode, FingerprintMode::Payload);
}

#[test]
fn test_validate_rejects_unusable_settings() {
    let cases = [
        GuardConfig::default().with_ttl_ms(0),
        GuardConfig::default().with_ttl_ms(MAX_LOCK_TTL_MS + 1),
        GuardConfig::default().with_ttl(Duration::MAX),
        GuardConfig::default().with_key_prefix(""),
        GuardConfig::default().with_busy_message(""),
    ];

    for config in cases {
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }
}

#[test]
fn test_validate_accepts_largest_store_ttl() {
    let config = GuardConfig::default().with_ttl_ms(MAX_LOCK_TTL_MS);
    assert!(config.validate().is_ok());

    let err = GuardConfig::default()
        .with_ttl_ms(u64::MAX)
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("cannot exceed"));
}

#[test]
fn test_partial_deserialization_keeps_defaults() {
    let config: GuardConfig =
        serde_json::from_str(r#"{ "ttl_ms": 250, "fingerprint_mode": "payload" }"#).unwrap();

    assert_eq!(config.ttl_ms, 250);
    assert_eq!(config.fingerprint_mode, FingerprintMode::Payload);
    assert_eq!(config.key_prefix, DEFAULT_KEY_PREFIX);
    assert_eq!(config.busy_message, DEFAULT_BUSY_MESSAGE);
}
