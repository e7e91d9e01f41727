pub mod mapping;
pub mod schema;

use anyhow::Result;
use std::path::Path;

use crate::config::Config;
use crate::core::config_schema::ValidationHelpers;

const CONFIG_FIELDS: &str =
    "[logging] verbose, time_format; [parser] unknown_keys, section, model, document";
const CONFIG_EXAMPLE: &str = "[parser]\nunknown_keys = \"fail\"";

/// Load the tool configuration
///
/// An explicit `--config` file must load cleanly. A discovered file that fails
/// validation is reported on stderr and replaced by the defaults, since logging
/// is not set up yet at this point.
pub async fn load_config(config_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_path {
        return Config::load_from_file(path).await;
    }

    match Config::load().await {
        Ok(config) => Ok(config),
        Err(e) => {
            eprintln!(
                "{}",
                ValidationHelpers::format_validation_error(
                    "config",
                    CONFIG_FIELDS,
                    CONFIG_EXAMPLE,
                    &e
                )
            );
            Ok(Config::default())
        }
    }
}
