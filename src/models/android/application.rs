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

pub static DEFAULT_CONFIG: TargetDescriptor = TargetDescriptor {
    type_name: "DefaultConfig",
    properties: properties![
        "applicationId": String,
        "versionCode": Integer => positive_integer,
        "versionName": String,
        "minSdk": Integer => positive_integer,
        "targetSdk": Integer => positive_integer,
        "testInstrumentationRunner": String,
        "multiDexEnabled": Boolean,
        "proguardFiles": StringList,
        "manifestPlaceholders": StringMap,
    ],
    containers: &[],
    nested: &[],
};

pub static PRODUCT_FLAVOR: TargetDescriptor = TargetDescriptor {
    type_name: "ProductFlavor",
    properties: properties![
        "dimension": String,
        "applicationId": String,
        "applicationIdSuffix": String,
        "versionCode": Integer => positive_integer,
        "versionName": String,
        "versionNameSuffix": String,
        "minSdk": Integer => positive_integer,
        "targetSdk": Integer => positive_integer,
        "testInstrumentationRunner": String,
        "multiDexEnabled": Boolean,
        "proguardFiles": StringList,
        "manifestPlaceholders": StringMap,
    ],
    containers: &[],
    nested: &[],
};

pub static APPLICATION_EXTENSION: TargetDescriptor = TargetDescriptor {
    type_name: "ApplicationExtension",
    properties: properties![
        "namespace": String,
        "compileSdk": Integer => positive_integer,
        "buildToolsVersion": String,
        "flavorDimensions": StringList,
    ],
    containers: &[
        ContainerDescriptor {
            name: "productFlavors",
            element: &PRODUCT_FLAVOR,
        },
        ContainerDescriptor {
            name: "buildTypes",
            element: &BUILD_TYPE,
        },
    ],
    nested: &[
        NestedDescriptor {
            name: "defaultConfig",
            target: &DEFAULT_CONFIG,
        },
        NestedDescriptor {
            name: "compileOptions",
            target: &COMPILE_OPTIONS,
        },
    ],
};

/// `android { defaultConfig { ... } }` of an application module
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(flatten)]
    pub settings: VariantDimension,
}

impl DefaultConfig {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Configurable for DefaultConfig {
    fn descriptor(&self) -> &'static TargetDescriptor {
        &DEFAULT_CONFIG
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        match name {
            "applicationId" => self.application_id = Some(string(value)?),
            "versionCode" => self.version_code = Some(positive(value)?),
            "versionName" => self.version_name = Some(string(value)?),
            _ => return self.settings.set_property(name, value),
        }
        Ok(())
    }
}

/// A `productFlavors` entry of an application module
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFlavor {
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_code: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_name_suffix: Option<String>,
    #[serde(flatten)]
    pub settings: VariantDimension,
}

impl Named for ProductFlavor {
    fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }
}

impl Configurable for ProductFlavor {
    fn descriptor(&self) -> &'static TargetDescriptor {
        &PRODUCT_FLAVOR
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        match name {
            "dimension" => self.dimension = Some(string(value)?),
            "applicationId" => self.application_id = Some(string(value)?),
            "applicationIdSuffix" => self.application_id_suffix = Some(string(value)?),
            "versionCode" => self.version_code = Some(positive(value)?),
            "versionName" => self.version_name = Some(string(value)?),
            "versionNameSuffix" => self.version_name_suffix = Some(string(value)?),
            _ => return self.settings.set_property(name, value),
        }
        Ok(())
    }
}

/// The `android` extension of a `com.android.application` module
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationExtension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compile_sdk: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_tools_version: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub flavor_dimensions: Vec<String>,
    #[serde(skip_serializing_if = "DefaultConfig::is_empty")]
    pub default_config: DefaultConfig,
    #[serde(skip_serializing_if = "CompileOptions::is_empty")]
    pub compile_options: CompileOptions,
    #[serde(skip_serializing_if = "DomainObjectContainer::is_empty")]
    pub product_flavors: DomainObjectContainer<ProductFlavor>,
    #[serde(skip_serializing_if = "DomainObjectContainer::is_empty")]
    pub build_types: DomainObjectContainer<BuildType>,
}

impl Configurable for ApplicationExtension {
    fn descriptor(&self) -> &'static TargetDescriptor {
        &APPLICATION_EXTENSION
    }

    fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<(), PropertyError> {
        match name {
            "namespace" => self.namespace = Some(string(value)?),
            "compileSdk" => self.compile_sdk = Some(positive(value)?),
            "buildToolsVersion" => self.build_tools_version = Some(string(value)?),
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
    ApplicationExtension,
    "android-application",
    "Android application module (com.android.application)",
    APPLICATION_EXTENSION
);
