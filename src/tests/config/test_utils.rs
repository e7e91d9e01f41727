use std::path::PathBuf;
use tempfile::TempDir;

use crate::config::{Config, LoggingConfig, ParserConfig};
use crate::core::parser::UnknownKeyPolicy;

/// Creates a minimal config for testing
/// Returns config with all None values
pub fn create_minimal_config() -> Config {
    Config {
        logging: None,
        parser: None,
    }
}

/// Creates a config with every section filled in
pub fn create_full_config() -> Config {
    Config {
        logging: Some(LoggingConfig {
            verbose: Some(true),
            time_format: Some("[hour]:[minute]:[second]".to_string()),
        }),
        parser: Some(ParserConfig {
            unknown_keys: Some(UnknownKeyPolicy::Fail),
            section: Some("android".to_string()),
            model: Some("android-library".to_string()),
            document: Some(PathBuf::from("module/build.toml")),
        }),
    }
}

/// Creates a temporary directory for testing
/// Returns TempDir instance for cleanup
pub fn create_temp_dir() -> TempDir {
    TempDir::new().unwrap()
}
