use serde::Serialize;

use crate::core::container::Named;
use crate::core::target::{Configurable, PropertyError, PropertyValue, TargetDescriptor};
use crate::models::{boolean, serialize_pairs, string, string_list, string_map};

pub static BUILD_TYPE: TargetDescriptor = TargetDescriptor {
    type_name: "BuildType",
    properties: properties![
        "isMinifyEnabled": Boolean,
        "isShrinkResources": Boolean,
        "isDebuggable": Boolean,
        "applicationIdSuffix": String,
        "versionNameSuffix": String,
        "proguardFiles": StringList,
        "manifestPlaceholders": StringMap,
    ],
    containers: &[],
    nested: &[],
};

pub static COMPILE_OPTIONS: TargetDescriptor = TargetDescriptor {
    type_name: "CompileOptions",
    properties: properties![
        "sourceCompatibility": String => java_version_check,
        "targetCompatibility": String => java_version_check,
        "encoding": String,
    ],
    containers: &[],
    nested: &[],
};

/// A `buildTypes` entry such as `debug` or `release`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildType {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_minify_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_shrink_resources: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_debuggable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name_suffix: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub proguard_files: Vec<String>,
    #[serde(
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_pairs"
    )]
    pub manifest_placeholders: Vec<(String, String)>,
}

impl Named for BuildType {
    fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Configurable for BuildType {
    fn descriptor(&self) -> &'static TargetDescriptor {
        &BUILD_TYPE
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        match name {
            "isMinifyEnabled" => self.is_minify_enabled = Some(boolean(value)?),
            "isShrinkResources" => self.is_shrink_resources = Some(boolean(value)?),
            "isDebuggable" => self.is_debuggable = Some(boolean(value)?),
            "applicationIdSuffix" => self.application_id_suffix = Some(string(value)?),
            "versionNameSuffix" => self.version_name_suffix = Some(string(value)?),
            "proguardFiles" => self.proguard_files = string_list(value)?,
            "manifestPlaceholders" => self.manifest_placeholders = string_map(value)?,
            _ => return Err(PropertyError::Unsupported),
        }
        Ok(())
    }
}

/// Java language level settings
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_compatibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_compatibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
}

impl CompileOptions {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Java versions are written either as `"17"` or `"VERSION_17"`
fn parse_java_version(raw: &str) -> Result<String, String> {
    let number = raw.strip_prefix("VERSION_").unwrap_or(raw).replace('_', ".");
    let valid = !number.is_empty()
        && number
            .split('.')
            .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()));
    if valid {
        Ok(number)
    } else {
        Err(format!("'{raw}' is not a Java version"))
    }
}

fn java_version_check(value: &PropertyValue) -> Result<(), String> {
    match value {
        PropertyValue::String(raw) => parse_java_version(raw).map(|_| ()),
        _ => Ok(()),
    }
}

fn java_version(value: PropertyValue) -> Result<String, PropertyError> {
    parse_java_version(&string(value)?).map_err(PropertyError::Rejected)
}

impl Configurable for CompileOptions {
    fn descriptor(&self) -> &'static TargetDescriptor {
        &COMPILE_OPTIONS
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        match name {
            "sourceCompatibility" => self.source_compatibility = Some(java_version(value)?),
            "targetCompatibility" => self.target_compatibility = Some(java_version(value)?),
            "encoding" => self.encoding = Some(string(value)?),
            _ => return Err(PropertyError::Unsupported),
        }
        Ok(())
    }
}
