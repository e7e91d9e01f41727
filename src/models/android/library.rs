use serde::Serialize;

use crate::core::container::{DomainObjectContainer, Named};
use crate::core::target::{
    ContainerDescriptor, Configurable, NamedContainer, NestedDescriptor, PropertyError,
    PropertyValue, TargetDescriptor,
};
use crate::models::android::common::{BuildType, CompileOptions, BUILD_TYPE, COMPILE_OPTIONS};
use crate::models::android::dimension::VariantDimension;
use crate::models::{positive, positive_integer, string, string_list};
use crate::register_model;

pub static LIBRARY_DEFAULT_CONFIG: TargetDescriptor = TargetDescriptor {
    type_name: "LibraryDefaultConfig",
    properties: properties![
        "minSdk": Integer => positive_integer,
        "targetSdk": Integer => positive_integer,
        "testInstrumentationRunner": String,
        "multiDexEnabled": Boolean,
        "proguardFiles": StringList,
        "consumerProguardFiles": StringList,
        "manifestPlaceholders": StringMap,
    ],
    containers: &[],
    nested: &[],
};

pub static LIBRARY_PRODUCT_FLAVOR: TargetDescriptor = TargetDescriptor {
    type_name: "LibraryProductFlavor",
    properties: properties![
        "dimension": String,
        "minSdk": Integer => positive_integer,
        "targetSdk": Integer => positive_integer,
        "testInstrumentationRunner": String,
        "multiDexEnabled": Boolean,
        "proguardFiles": StringList,
        "consumerProguardFiles": StringList,
        "manifestPlaceholders": StringMap,
    ],
    containers: &[],
    nested: &[],
};

pub static LIBRARY_EXTENSION: TargetDescriptor = TargetDescriptor {
    type_name: "LibraryExtension",
    properties: properties![
        "namespace": String,
        "compileSdk": Integer => positive_integer,
        "buildToolsVersion": String,
        "resourcePrefix": String,
        "flavorDimensions": StringList,
    ],
    containers: &[
        ContainerDescriptor {
            name: "productFlavors",
            element: &LIBRARY_PRODUCT_FLAVOR,
        },
        ContainerDescriptor {
            name: "buildTypes",
            element: &BUILD_TYPE,
        },
    ],
    nested: &[
        NestedDescriptor {
            name: "defaultConfig",
            target: &LIBRARY_DEFAULT_CONFIG,
        },
        NestedDescriptor {
            name: "compileOptions",
            target: &COMPILE_OPTIONS,
        },
    ],
};

/// Library default config; libraries have no application id or version
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryDefaultConfig {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub consumer_proguard_files: Vec<String>,
    #[serde(flatten)]
    pub settings: VariantDimension,
}

impl LibraryDefaultConfig {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Configurable for LibraryDefaultConfig {
    fn descriptor(&self) -> &'static TargetDescriptor {
        &LIBRARY_DEFAULT_CONFIG
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        match name {
            "consumerProguardFiles" => self.consumer_proguard_files = string_list(value)?,
            _ => return self.settings.set_property(name, value),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryProductFlavor {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub consumer_proguard_files: Vec<String>,
    #[serde(flatten)]
    pub settings: VariantDimension,
}

impl Named for LibraryProductFlavor {
    fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Configurable for LibraryProductFlavor {
    fn descriptor(&self) -> &'static TargetDescriptor {
        &LIBRARY_PRODUCT_FLAVOR
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        match name {
            "dimension" => self.dimension = Some(string(value)?),
            "consumerProguardFiles" => self.consumer_proguard_files = string_list(value)?,
            _ => return self.settings.set_property(name, value),
        }
        Ok(())
    }
}

/// The `android` extension of a `com.android.library` module
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryExtension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_sdk: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_tools_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_prefix: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flavor_dimensions: Vec<String>,
    #[serde(skip_serializing_if = "LibraryDefaultConfig::is_empty")]
    pub default_config: LibraryDefaultConfig,
    #[serde(skip_serializing_if = "CompileOptions::is_empty")]
    pub compile_options: CompileOptions,
    #[serde(skip_serializing_if = "DomainObjectContainer::is_empty")]
    pub product_flavors: DomainObjectContainer<LibraryProductFlavor>,
    #[serde(skip_serializing_if = "DomainObjectContainer::is_empty")]
    pub build_types: DomainObjectContainer<BuildType>,
}

impl Configurable for LibraryExtension {
    fn descriptor(&self) -> &'static TargetDescriptor {
        &LIBRARY_EXTENSION
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        match name {
            "namespace" => self.namespace = Some(string(value)?),
            "compileSdk" => self.compile_sdk = Some(positive(value)?),
            "buildToolsVersion" => self.build_tools_version = Some(string(value)?),
            "resourcePrefix" => self.resource_prefix = Some(string(value)?),
            "flavorDimensions" => self.flavor_dimensions = string_list(value)?,
            _ => return Err(PropertyError::Unsupported),
        }
        Ok(())
    }

    fn container(&mut self, name: &str) -> Option<&mut dyn NamedContainer> {
        match name {
            "productFlavors" => Some(&mut self.product_flavors),
            "buildTypes" => Some(&mut self.build_types),
            _ => None,
        }
    }

    fn nested(&mut self, name: &str) -> Option<&mut dyn Configurable> {
        match name {
            "defaultConfig" => Some(&mut self.default_config),
            "compileOptions" => Some(&mut self.compile_options),
            _ => None,
        }
    }
}

register_model!(
    LibraryExtension,
    "android-library",
    "Android library module (com.android.library)",
    LIBRARY_EXTENSION
);
