use serde::Serialize;

use crate::core::target::{PropertyError, PropertyValue};
use crate::models::{boolean, positive, serialize_pairs, string, string_list, string_map};

/// Settings shared by the default config and every product flavor
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDimension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sdk: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sdk: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_instrumentation_runner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_dex_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub proguard_files: Vec<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_pairs"
    )]
    pub manifest_placeholders: Vec<(String, String)>,
}

impl VariantDimension {
    /// Assign one of the shared settings; anything else is `Unsupported`
    pub fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        match name {
            "minSdk" => self.min_sdk = Some(positive(value)?),
            "targetSdk" => self.target_sdk = Some(positive(value)?),
            "testInstrumentationRunner" => {
                self.test_instrumentation_runner = Some(string(value)?)
            }
            "multiDexEnabled" => self.multi_dex_enabled = Some(boolean(value)?),
            "proguardFiles" => self.proguard_files = string_list(value)?,
            "manifestPlaceholders" => self.manifest_placeholders = string_map(value)?,
            _ => return Err(PropertyError::Unsupported),
        }
        Ok(())
    }
}
