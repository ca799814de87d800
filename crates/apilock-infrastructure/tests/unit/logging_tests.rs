//! Logging Tests

use apilock_infrastructure::constants::{DEFAULT_LOG_LEVEL, LOG_MAX_FILES};
use apilock_infrastructure::logging::{
    LoggingConfig, init_logging, level_filter, parse_log_level,
};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_level_filter_normalises_aliases() {
    assert_eq!(level_filter("warning").unwrap().to_string(), "warn");
    assert_eq!(level_filter("WARNING").unwrap().to_string(), "warn");
    assert_eq!(level_filter("Debug").unwrap().to_string(), "debug");
    assert!(level_filter("loud").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
    assert_eq!(config.max_files, LOG_MAX_FILES);
}

#[test]
fn test_init_logging_rejects_bad_level_before_installing() {
    let config = LoggingConfig {
        level: "verbose".to_string(),
        ..LoggingConfig::default()
    };

    assert!(init_logging(&config).is_err());
}

#[test]
fn test_init_logging_twice_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = LoggingConfig {
        json_format: true,
        file_output: Some(dir.path().join("apilock.log")),
        ..LoggingConfig::default()
    };

    // one global subscriber per process
    let _ = init_logging(&config);
    assert!(init_logging(&config).is_err());
}
