use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::config_schema::{ConfigSchema, ValidationHelpers};
use crate::core::parser::{ParserOptions, UnknownKeyPolicy};

pub const DEFAULT_TIME_FORMAT: &str = "[year]-[month]-[day] [hour]:[minute]:[second]";
pub const DEFAULT_SECTION: &str = "android";
pub const DEFAULT_MODEL: &str = "android-application";
pub const DEFAULT_DOCUMENT: &str = "build.toml";

/// Configuration for the declarative tool itself
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// Logging configuration
    pub logging: Option<LoggingConfig>,

    /// Mapping defaults
    pub parser: Option<ParserConfig>,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct LoggingConfig {
    /// Enable verbose logging by default
    pub verbose: Option<bool>,

    /// Time format for log timestamps (uses time crate format syntax)
    pub time_format: Option<String>,
}

/// Defaults for mapping commands, each overridable on the command line
#[derive(Debug, Clone, Default, Deserialize, Serialize, JsonSchema)]
pub struct ParserConfig {
    #[schemars(description = "What to do with keys the model does not declare")]
    pub unknown_keys: Option<UnknownKeyPolicy>,

    #[schemars(description = "Top-level table of the build document to map")]
    pub section: Option<String>,

    #[schemars(description = "Registered model the section is mapped onto")]
    pub model: Option<String>,

    #[schemars(description = "Build document used when no file is given")]
    pub document: Option<PathBuf>,
}

impl ConfigSchema for LoggingConfig {
    fn section_name() -> &'static str {
        "logging"
    }

    fn validate(&self) -> Result<()> {
        if let Some(format) = &self.time_format {
            ValidationHelpers::validate_time_format(format)?;
        }
        Ok(())
    }
}

impl ConfigSchema for ParserConfig {
    fn section_name() -> &'static str {
        "parser"
    }

    fn validate(&self) -> Result<()> {
        if let Some(section) = &self.section {
            ValidationHelpers::validate_bare_key("section", section)?;
        }
        if let Some(model) = &self.model {
            ValidationHelpers::validate_bare_key("model", model)?;
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .await
            .context("Failed to read config file")?;

        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(content).context("Failed to parse config file as TOML")?;

        let logging = table
            .get("logging")
            .map(LoggingConfig::from_toml_value)
            .transpose()?;
        let parser = table
            .get("parser")
            .map(ParserConfig::from_toml_value)
            .transpose()?;

        Ok(Self { logging, parser })
    }

    /// Try to load configuration from standard locations
    pub async fn load() -> Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from_file(&path).await;
            }
        }

        // Return default config if no config file found
        Ok(Self::default())
    }

    /// Get potential configuration file paths in order of preference
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. Current directory
        paths.push(PathBuf::from("declarative.toml"));
        paths.push(PathBuf::from(".declarative.toml"));

        // 2. User config directory
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("declarative").join("config.toml"));
        }

        // 3. User home directory
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".declarative.toml"));
        }

        paths
    }

    /// Check if verbose logging is enabled by default
    pub fn is_verbose_default(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    /// Get the time format for log timestamps
    pub fn get_time_format(&self) -> String {
        self.logging
            .as_ref()
            .and_then(|l| l.time_format.clone())
            .unwrap_or_else(|| DEFAULT_TIME_FORMAT.to_string())
    }

    /// Parser options, with `strict` forcing unknown keys to fail
    pub fn parser_options(&self, strict: bool) -> ParserOptions {
        let unknown_keys = if strict {
            UnknownKeyPolicy::Fail
        } else {
            self.parser
                .as_ref()
                .and_then(|p| p.unknown_keys)
                .unwrap_or_default()
        };
        ParserOptions { unknown_keys }
    }

    pub fn get_section(&self) -> String {
        self.parser
            .as_ref()
            .and_then(|p| p.section.clone())
            .unwrap_or_else(|| DEFAULT_SECTION.to_string())
    }

    pub fn get_model(&self) -> String {
        self.parser
            .as_ref()
            .and_then(|p| p.model.clone())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn get_document_path(&self) -> PathBuf {
        self.parser
            .as_ref()
            .and_then(|p| p.document.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCUMENT))
    }
}
