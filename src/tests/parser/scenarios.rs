use crate::core::key_path::KeyPath;
use crate::core::parser::DeclarativeParser;
use crate::core::target::PropertyValue;

use super::test_utils::{
    document, get_container, get_nested, interactions, maybe_create, new_log, set, string,
    strings, MockTarget, PROJECT,
};

/// Test that a list property is assigned once with the document's value
/// Verifies the flavor dimension scenario records no other interaction
#[test]
fn test_set_dimension() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);
    let toml = document(
        r#"
        [android]
        flavorDimensions = [ "version" ]
        "#,
    );

    DeclarativeParser::new()
        .parse(toml.section("android").unwrap(), &mut extension)
        .unwrap();

    assert_eq!(
        interactions(&log),
        vec![set("extension", "flavorDimensions", strings(&["version"]))]
    );
    assert_eq!(
        extension.value("flavorDimensions"),
        Some(&strings(&["version"]))
    );
}

/// Test product flavor container population
/// Verifies each flavor is created once and receives exactly its own properties
#[test]
fn test_product_flavors() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);
    let toml = document(
        r#"
        [android]
        flavorDimensions = [ "version" ]

        [android.productFlavors.demo]
        dimension="version"
        applicationIdSuffix=".demo"
        versionNameSuffix="-demo"

        [android.productFlavors.full]
        dimension="version"
        applicationIdSuffix=".full"
        versionNameSuffix="-full"
        "#,
    );

    DeclarativeParser::new()
        .parse(toml.section("android").unwrap(), &mut extension)
        .unwrap();

    let demo = "extension.productFlavors.demo";
    let full = "extension.productFlavors.full";
    assert_eq!(
        interactions(&log),
        vec![
            set("extension", "flavorDimensions", strings(&["version"])),
            get_container("extension", "productFlavors"),
            maybe_create("extension.productFlavors", "demo"),
            set(demo, "dimension", string("version")),
            set(demo, "applicationIdSuffix", string(".demo")),
            set(demo, "versionNameSuffix", string("-demo")),
            maybe_create("extension.productFlavors", "full"),
            set(full, "dimension", string("version")),
            set(full, "applicationIdSuffix", string(".full")),
            set(full, "versionNameSuffix", string("-full")),
        ]
    );

    let flavors = extension.container_mock("productFlavors").unwrap();
    assert_eq!(flavors.child_names(), vec!["demo", "full"]);
    let demo_flavor = flavors.child("demo").unwrap();
    assert_eq!(demo_flavor.value("applicationIdSuffix"), Some(&string(".demo")));
    assert_eq!(demo_flavor.value("versionNameSuffix"), Some(&string("-demo")));
    let full_flavor = flavors.child("full").unwrap();
    assert_eq!(full_flavor.value("dimension"), Some(&string("version")));
    assert_eq!(full_flavor.value("versionNameSuffix"), Some(&string("-full")));
}

/// Test that list properties keep the document's element order
#[test]
fn test_list_order_preserved() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);
    let toml = document(
        r#"
        [android]
        flavorDimensions = ["version", "api", "abi"]
        "#,
    );

    DeclarativeParser::new()
        .parse(toml.section("android").unwrap(), &mut extension)
        .unwrap();

    assert_eq!(
        extension.value("flavorDimensions"),
        Some(&strings(&["version", "api", "abi"]))
    );
}

/// Test that a nested singleton is configured without any create step
#[test]
fn test_nested_singleton() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);
    let toml = document(
        r#"
        [android]
        namespace = "com.example.app"

        [android.defaultConfig]
        applicationId = "com.example.app"
        minSdk = 24
        "#,
    );

    DeclarativeParser::new()
        .parse(toml.section("android").unwrap(), &mut extension)
        .unwrap();

    assert_eq!(
        interactions(&log),
        vec![
            set("extension", "namespace", string("com.example.app")),
            get_nested("extension", "defaultConfig"),
            set(
                "extension.defaultConfig",
                "applicationId",
                string("com.example.app")
            ),
            set(
                "extension.defaultConfig",
                "minSdk",
                PropertyValue::Integer(24)
            ),
        ]
    );
    let default_config = extension.nested_mock("defaultConfig").unwrap();
    assert_eq!(
        default_config.value("minSdk"),
        Some(&PropertyValue::Integer(24))
    );
}

/// Test that untouched members are never read or written
#[test]
fn test_unmentioned_members_untouched() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);
    let toml = document(
        r#"
        [android]
        compileSdk = 34
        "#,
    );

    DeclarativeParser::new()
        .parse(toml.section("android").unwrap(), &mut extension)
        .unwrap();

    assert_eq!(
        interactions(&log),
        vec![set("extension", "compileSdk", PropertyValue::Integer(34))]
    );
    assert!(extension
        .container_mock("productFlavors")
        .unwrap()
        .child_names()
        .is_empty());
    assert!(extension.value("namespace").is_none());
}

/// Test that re-parsing a document against the same target reuses existing children
#[test]
fn test_repeated_parse_reuses_children() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);
    let toml = document(
        r#"
        [android.productFlavors.demo]
        dimension = "version"
        "#,
    );
    let parser = DeclarativeParser::new();
    let android = toml.section("android").unwrap();

    parser.parse(android, &mut extension).unwrap();
    parser.parse(android, &mut extension).unwrap();

    let flavors = extension.container_mock("productFlavors").unwrap();
    assert_eq!(flavors.child_names(), vec!["demo"]);
}

/// Test container-of-container documents recurse through element descriptors
#[test]
fn test_container_of_container() {
    let log = new_log();
    let mut project = MockTarget::new("project", &PROJECT, &log);
    let toml = document(
        r#"
        [build.variants.release]
        enabled = true

        [build.variants.release.outputs.universal]
        fileName = "app-universal.apk"
        "#,
    );

    DeclarativeParser::new()
        .parse_at(
            toml.section("build").unwrap(),
            KeyPath::parse("build"),
            &mut project,
        )
        .unwrap();

    let release = "project.variants.release";
    assert_eq!(
        interactions(&log),
        vec![
            get_container("project", "variants"),
            maybe_create("project.variants", "release"),
            set(release, "enabled", PropertyValue::Boolean(true)),
            get_container(release, "outputs"),
            maybe_create("project.variants.release.outputs", "universal"),
            set(
                "project.variants.release.outputs.universal",
                "fileName",
                string("app-universal.apk")
            ),
        ]
    );
}

/// Test that parse_section reads the named top-level table
#[test]
fn test_parse_section() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);
    let toml = document(
        r#"
        [android]
        namespace = "com.example"
        "#,
    );

    DeclarativeParser::new()
        .parse_section(&toml, "android", &mut extension)
        .unwrap();

    assert_eq!(extension.value("namespace"), Some(&string("com.example")));
}
