use crate::core::document::ValueKind;
use crate::core::error::{Expected, MappingError};
use crate::core::key_path::KeyPath;
use crate::core::parser::DeclarativeParser;
use crate::core::target::PropertyKind;

use super::test_utils::{document, interactions, new_log, MockTarget};

fn parse_android(text: &str, extension: &mut MockTarget) -> Result<(), MappingError> {
    let toml = document(text);
    DeclarativeParser::new().parse_section(&toml, "android", extension)
}

/// Test table given where a scalar property is expected
#[test]
fn test_table_for_scalar_property() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);

    let error = parse_android(
        r#"
        [android.namespace]
        value = "com.example"
        "#,
        &mut extension,
    )
    .unwrap_err();

    assert_eq!(
        error,
        MappingError::TypeMismatch {
            path: KeyPath::parse("android.namespace"),
            expected: Expected::Property(PropertyKind::String),
            found: ValueKind::Table,
        }
    );
}

/// Test wrong scalar kind reports the full path
#[test]
fn test_wrong_scalar_kind() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);

    let error = parse_android(
        r#"
        [android]
        compileSdk = "34"
        "#,
        &mut extension,
    )
    .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Type mismatch at 'android.compileSdk': expected integer, found string"
    );
}

/// Test a bad list element is located by index
#[test]
fn test_bad_list_element() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);

    let error = parse_android(
        r#"
        [android]
        flavorDimensions = ["version", 2]
        "#,
        &mut extension,
    )
    .unwrap_err();

    assert_eq!(error.path().to_string(), "android.flavorDimensions[1]");
}

/// Test container key holding a scalar
#[test]
fn test_container_given_scalar() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);

    let error = parse_android(
        r#"
        [android]
        productFlavors = "demo"
        "#,
        &mut extension,
    )
    .unwrap_err();

    assert_eq!(
        error,
        MappingError::TypeMismatch {
            path: KeyPath::parse("android.productFlavors"),
            expected: Expected::Container,
            found: ValueKind::String,
        }
    );
}

/// Test container instance that is not a table
#[test]
fn test_container_instance_not_table() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);

    let error = parse_android(
        r#"
        [android.productFlavors]
        demo = "version"
        "#,
        &mut extension,
    )
    .unwrap_err();

    assert_eq!(
        error,
        MappingError::TypeMismatch {
            path: KeyPath::parse("android.productFlavors.demo"),
            expected: Expected::Table,
            found: ValueKind::String,
        }
    );
}

/// Test arrays of tables are rejected rather than guessed at
#[test]
fn test_array_of_tables_rejected() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);

    let error = parse_android(
        r#"
        [[android.productFlavors]]
        name = "demo"
        "#,
        &mut extension,
    )
    .unwrap_err();

    assert!(matches!(
        error,
        MappingError::TypeMismatch {
            found: ValueKind::TableArray,
            ..
        }
    ));
}

/// Test that a failure deep in the document leaves the target untouched
/// Verifies that no earlier, valid entries were applied before the error
#[test]
fn test_failure_applies_nothing() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);

    let error = parse_android(
        r#"
        [android]
        namespace = "com.example"
        flavorDimensions = ["version"]

        [android.productFlavors.demo]
        dimension = "version"

        [android.productFlavors.full]
        minSdk = "twenty-one"
        "#,
        &mut extension,
    )
    .unwrap_err();

    assert_eq!(error.path().to_string(), "android.productFlavors.full.minSdk");
    assert!(interactions(&log).is_empty());
    assert!(extension.value("namespace").is_none());
}

/// Test a descriptor value check rejects during planning
/// Verifies that the first flavor is not created before the second one fails
#[test]
fn test_checked_value_rejected_before_apply() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);

    let error = parse_android(
        r#"
        [android]
        flavorDimensions = ["version"]

        [android.productFlavors.demo]
        minSdk = 21

        [android.productFlavors.full]
        minSdk = 0
        "#,
        &mut extension,
    )
    .unwrap_err();

    assert_eq!(
        error,
        MappingError::InvalidValue {
            path: KeyPath::parse("android.productFlavors.full.minSdk"),
            reason: "API level must be positive, got 0".to_string(),
        }
    );
    assert!(interactions(&log).is_empty());
    assert!(extension.value("flavorDimensions").is_none());
}

/// Test missing container backing object is a capability error
#[test]
fn test_missing_container_capability() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log).without_container("productFlavors");

    let error = parse_android(
        r#"
        [android.productFlavors.demo]
        dimension = "version"
        "#,
        &mut extension,
    )
    .unwrap_err();

    assert_eq!(
        error,
        MappingError::MissingCapability {
            path: KeyPath::parse("android.productFlavors"),
            type_name: "ApplicationExtension",
            capability: "container",
        }
    );
}

/// Test setter rejection surfaces as an invalid value with its path
#[test]
fn test_rejected_value() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log).rejecting("compileSdk");

    let error = parse_android(
        r#"
        [android]
        compileSdk = 34
        "#,
        &mut extension,
    )
    .unwrap_err();

    assert_eq!(
        error,
        MappingError::InvalidValue {
            path: KeyPath::parse("android.compileSdk"),
            reason: "compileSdk is locked".to_string(),
        }
    );
}

/// Test missing and non-table sections
#[test]
fn test_missing_section() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);
    let toml = document("android = 3");
    let parser = DeclarativeParser::new();

    let error = parser
        .parse_section(&toml, "android", &mut extension)
        .unwrap_err();
    assert_eq!(
        error,
        MappingError::MissingSection {
            path: KeyPath::parse("android"),
        }
    );

    let error = parser
        .parse_section(&toml, "kotlin", &mut extension)
        .unwrap_err();
    assert!(error.to_string().contains("Section 'kotlin'"));
}
