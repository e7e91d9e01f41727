use crate::symbols::*;
use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

/// Trait for tool configuration sections with schema support
pub trait ConfigSchema: DeserializeOwned + JsonSchema {
    /// The name of this configuration section (for error reporting)
    fn section_name() -> &'static str;

    /// Validate the configuration and provide detailed error messages
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Parse and validate configuration from TOML value
    fn from_toml_value(value: &toml::Value) -> Result<Self> {
        let config: Self = value.clone().try_into().with_context(|| {
            format!(
                "Failed to parse {} configuration",
                <Self as ConfigSchema>::section_name()
            )
        })?;

        config.validate().with_context(|| {
            format!(
                "Invalid {} configuration",
                <Self as ConfigSchema>::section_name()
            )
        })?;

        Ok(config)
    }

    /// JSON schema of this section, for documentation output
    fn section_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(Self)
    }
}

/// Helper functions for common validation patterns
pub struct ValidationHelpers;

impl ValidationHelpers {
    /// Validate a bare TOML key such as a section or model name
    pub fn validate_bare_key(field: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Err(anyhow::anyhow!("{field} must not be empty"));
        }
        if let Some(invalid) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
        {
            return Err(anyhow::anyhow!(
                "{field} '{value}' contains invalid character '{invalid}'. \
                 Use letters, digits, '_' or '-'"
            ));
        }
        Ok(())
    }

    /// Validate a `time` crate format description
    pub fn validate_time_format(format: &str) -> Result<()> {
        time::format_description::parse(format)
            .map(|_| ())
            .with_context(|| format!("Invalid time format '{format}'"))
    }

    /// Format a comprehensive validation error message for a config section
    pub fn format_validation_error(
        section: &str,
        valid_fields: &str,
        example: &str,
        error: &anyhow::Error,
    ) -> String {
        // Extract the most specific error from the chain
        let root_error = error
            .chain()
            .last()
            .map(|e| e.to_string())
            .unwrap_or_else(|| error.to_string());

        format!(
            "{SYMBOL_INDICATOR_WARNING} Configuration validation failed for [{section}]\n\
             Error: {root_error}\n\
             Valid fields: {valid_fields}\n\
             Example: {example}"
        )
    }
}
