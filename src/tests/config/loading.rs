use anyhow::Result;

use crate::config::Config;
use crate::core::parser::UnknownKeyPolicy;

use super::test_utils::{create_full_config, create_temp_dir};

/// Test config loading from disk
/// Verifies that a serialized configuration loads back with the same settings
#[tokio::test]
async fn test_config_load_from_file() -> Result<()> {
    let temp_dir = create_temp_dir();
    let config_path = temp_dir.path().join("declarative.toml");
    let content = toml::to_string_pretty(&create_full_config())?;
    tokio::fs::write(&config_path, content).await?;

    let loaded = Config::load_from_file(&config_path).await?;

    assert!(loaded.is_verbose_default());
    assert_eq!(loaded.get_model(), "android-library");
    assert_eq!(
        loaded.parser_options(false).unknown_keys,
        UnknownKeyPolicy::Fail
    );

    Ok(())
}

/// Test config paths discovery
/// Verifies that config file paths are discovered correctly
#[tokio::test]
async fn test_config_paths() {
    let paths = Config::get_config_paths();
    assert!(!paths.is_empty());
    assert!(paths
        .iter()
        .any(|p| p.file_name().unwrap() == "declarative.toml"));
}

/// Test loading a missing file reports context
#[tokio::test]
async fn test_missing_config_file() {
    let temp_dir = create_temp_dir();
    let result = Config::load_from_file(temp_dir.path().join("absent.toml")).await;

    let error = result.unwrap_err();
    assert!(error.to_string().contains("Failed to read config file"));
}

/// Test invalid TOML reports context
#[tokio::test]
async fn test_invalid_config_toml() -> Result<()> {
    let temp_dir = create_temp_dir();
    let config_path = temp_dir.path().join("declarative.toml");
    tokio::fs::write(&config_path, "[parser\nsection = ").await?;

    let error = Config::load_from_file(&config_path).await.unwrap_err();
    assert!(error
        .to_string()
        .contains("Failed to parse config file as TOML"));

    Ok(())
}
