//! Android Gradle plugin DSL objects
//!
//! `android-application` and `android-library` are registered as models.
//! Both take the same top-level shape:
//!
//! ```toml
//! [android]
//! namespace = "com.example.app"
//! compileSdk = 34
//! flavorDimensions = ["version"]
//!
//! [android.defaultConfig]
//! minSdk = 24
//!
//! [android.productFlavors.demo]
//! dimension = "version"
//! ```

/// Build a `&'static [PropertyDescriptor]` from `"name": Kind` pairs,
/// optionally followed by `=> check` to validate values while planning
macro_rules! properties {
    (@check) => {
        None
    };
    (@check $check:path) => {
        Some($check)
    };
    ($($name:literal : $kind:ident $(=> $check:path)?),* $(,)?) => {
        &[$($crate::core::target::PropertyDescriptor {
            name: $name,
            kind: $crate::core::target::PropertyKind::$kind,
            check: properties!(@check $($check)?),
        }),*]
    };
}

pub mod application;
pub mod common;
pub mod dimension;
pub mod library;

pub use application::{ApplicationExtension, DefaultConfig, ProductFlavor};
pub use common::{BuildType, CompileOptions};
pub use dimension::VariantDimension;
pub use library::{LibraryDefaultConfig, LibraryExtension, LibraryProductFlavor};
