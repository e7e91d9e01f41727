use anyhow::{anyhow, Context, Result};

use crate::config::{Config, LoggingConfig, ParserConfig};
use crate::core::config_schema::ConfigSchema;
use crate::core::registry::ModelRegistry;
use crate::core::schema::descriptor_schema;
use crate::symbols::*;

/// JSON Schema of a build document section for `model_name`
pub fn model_schema(model_name: &str, strict: bool) -> Result<serde_json::Value> {
    let registry = ModelRegistry::discover();
    let model = registry.get(model_name).ok_or_else(|| {
        anyhow!(
            "Unknown model '{model_name}'. Available models: {}",
            registry.names().join(", ")
        )
    })?;

    serde_json::to_value(descriptor_schema(model.target, strict))
        .context("Failed to serialize schema")
}

/// JSON Schema of the tool's own configuration file
pub fn tool_config_schema() -> Result<serde_json::Value> {
    let mut sections = serde_json::Map::new();
    sections.insert(
        LoggingConfig::section_name().to_string(),
        serde_json::to_value(LoggingConfig::section_schema())?,
    );
    sections.insert(
        ParserConfig::section_name().to_string(),
        serde_json::to_value(ParserConfig::section_schema())?,
    );
    Ok(serde_json::Value::Object(sections))
}

/// Handle the `schema` command
pub fn handle_schema_command(
    model: Option<String>,
    strict: bool,
    tool_config: bool,
    config: &Config,
) -> Result<()> {
    let schema = if tool_config {
        tool_config_schema()?
    } else {
        let model_name = model.unwrap_or_else(|| config.get_model());
        model_schema(&model_name, strict)?
    };

    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

/// Handle the `models` command
pub fn handle_models_command() {
    let registry = ModelRegistry::discover();

    println!("Available models:");
    println!();
    for model in registry.models() {
        println!(
            "  {SYMBOL_CONTENT_PACKAGE} {:<22} -> {:<22} {}",
            model.name, model.target.type_name, model.description
        );
    }
    println!();
    println!("Usage:");
    println!("  declarative apply --model <model> [FILE]   Map a build document");
    println!("  declarative schema --model <model>         Show the accepted keys");
}
