use crate::core::parser::{DeclarativeParser, Effect};
use crate::core::target::PropertyValue;

use super::test_utils::{
    document, interactions, new_log, string, strings, MockTarget, EXTENSION,
};

const FLAVORS: &str = r#"
[android]
flavorDimensions = ["version"]

[android.defaultConfig]
minSdk = 24

[android.productFlavors.demo]
dimension = "version"
manifestPlaceholders = { hostName = "demo.example.com", scheme = "https" }

[android.productFlavors.full]
dimension = "version"
"#;

/// Test that planning needs only descriptors and mirrors the document tree
#[test]
fn test_plan_structure() {
    let toml = document(FLAVORS);

    let plan = DeclarativeParser::new()
        .plan_section(&toml, "android", &EXTENSION)
        .unwrap();

    assert_eq!(plan.type_name, "ApplicationExtension");
    assert_eq!(plan.path.to_string(), "android");
    assert_eq!(plan.effects.len(), 3);
    assert_eq!(
        plan.effects[0],
        Effect::Assign {
            key: "flavorDimensions".to_string(),
            value: strings(&["version"]),
        }
    );
    match &plan.effects[2] {
        Effect::Populate { key, instances } => {
            assert_eq!(key, "productFlavors");
            let names: Vec<&str> = instances.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(names, vec!["demo", "full"]);
            assert_eq!(instances[0].plan.type_name, "ProductFlavor");
            assert_eq!(
                instances[0].plan.path.to_string(),
                "android.productFlavors.demo"
            );
        }
        other => panic!("Expected Populate effect, got {other:?}"),
    }
    assert_eq!(plan.assignment_count(), 5);
}

/// Test applying a precomputed plan gives the same result as parse
#[test]
fn test_apply_precomputed_plan() {
    let toml = document(FLAVORS);
    let parser = DeclarativeParser::new();
    let plan = parser.plan_section(&toml, "android", &EXTENSION).unwrap();

    let planned_log = new_log();
    let mut planned = MockTarget::extension(&planned_log);
    parser.apply(&plan, &mut planned).unwrap();

    let parsed_log = new_log();
    let mut parsed = MockTarget::extension(&parsed_log);
    parser.parse_section(&toml, "android", &mut parsed).unwrap();

    assert_eq!(interactions(&planned_log), interactions(&parsed_log));
    let demo = planned
        .container_mock("productFlavors")
        .unwrap()
        .child("demo")
        .unwrap();
    assert_eq!(demo.value("dimension"), Some(&string("version")));
    assert_eq!(
        demo.value("manifestPlaceholders"),
        Some(&PropertyValue::StringMap(vec![
            ("hostName".to_string(), "demo.example.com".to_string()),
            ("scheme".to_string(), "https".to_string()),
        ]))
    );
}

/// Test the human-readable plan rendering
#[test]
fn test_plan_display() {
    let toml = document(
        r#"
        [android]
        flavorDimensions = ["version"]

        [android.productFlavors.demo]
        dimension = "version"
        "#,
    );

    let plan = DeclarativeParser::new()
        .plan_section(&toml, "android", &EXTENSION)
        .unwrap();

    assert_eq!(
        plan.to_string(),
        "android (ApplicationExtension):\n\
         \x20 flavorDimensions = [\"version\"]\n\
         \x20 productFlavors:\n\
         \x20   demo (ProductFlavor):\n\
         \x20     dimension = \"version\"\n"
    );
}

/// Test an empty table produces an empty plan and no interactions
#[test]
fn test_empty_table() {
    let log = new_log();
    let mut extension = MockTarget::extension(&log);
    let toml = document("[android]");

    let parser = DeclarativeParser::new();
    let plan = parser.plan_section(&toml, "android", &EXTENSION).unwrap();
    assert!(plan.is_empty());

    parser.apply(&plan, &mut extension).unwrap();
    assert!(interactions(&log).is_empty());
}
