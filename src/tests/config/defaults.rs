use std::path::PathBuf;

use crate::config::{Config, LoggingConfig, DEFAULT_TIME_FORMAT};
use crate::core::parser::UnknownKeyPolicy;

use super::test_utils::{create_full_config, create_minimal_config};

/// Test default values when nothing is configured
#[test]
fn test_config_defaults() {
    let config = create_minimal_config();

    assert!(!config.is_verbose_default());
    assert_eq!(config.get_time_format(), DEFAULT_TIME_FORMAT);
    assert_eq!(config.get_section(), "android");
    assert_eq!(config.get_model(), "android-application");
    assert_eq!(config.get_document_path(), PathBuf::from("build.toml"));
    assert_eq!(
        config.parser_options(false).unknown_keys,
        UnknownKeyPolicy::Ignore
    );
}

/// Test configured values take precedence over defaults
#[test]
fn test_config_values_used() {
    let config = create_full_config();

    assert!(config.is_verbose_default());
    assert_eq!(config.get_time_format(), "[hour]:[minute]:[second]");
    assert_eq!(config.get_model(), "android-library");
    assert_eq!(
        config.get_document_path(),
        PathBuf::from("module/build.toml")
    );
    assert_eq!(
        config.parser_options(false).unknown_keys,
        UnknownKeyPolicy::Fail
    );
}

/// Test the strict flag overrides a lenient configuration
#[test]
fn test_strict_flag_overrides_config() {
    let config = create_minimal_config();
    assert_eq!(
        config.parser_options(true).unknown_keys,
        UnknownKeyPolicy::Fail
    );
}

/// Test logging section without verbose falls back to false
#[test]
fn test_logging_without_verbose() {
    let config = Config {
        logging: Some(LoggingConfig {
            verbose: None,
            time_format: None,
        }),
        parser: None,
    };
    assert!(!config.is_verbose_default());
    assert_eq!(config.get_time_format(), DEFAULT_TIME_FORMAT);
}
