//! End-to-end translation of Go fixture packages.

use std::path::PathBuf;

use fnschema_core::{
    CyclePolicy, DataType, Definition, DuplicatePolicy, ErrorKind, TranslateOptions,
};
use fnschema_parser::LoadOptions;
use fnschema_translate::{translate, translate_with};
use pretty_assertions::assert_eq;
use serde_json::json;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn with_options(dir: &str, name: &str, options: TranslateOptions) -> Result<Definition, ErrorKind> {
    translate_with(fixture(dir), name, &LoadOptions::default(), &options)
        .map(|details| details.parameters)
        .map_err(|err| err.kind())
}

// ── Widgets ────────────────────────────────────────────────────

#[test]
fn widget_factory_flattens_to_options_struct() {
    let details = translate(fixture("widgets"), "NewWidgetFactory").unwrap();
    assert_eq!(details.name, "NewWidgetFactory");
    assert_eq!(details.description, "NewWidgetFactory creates a new widget factory.");

    let value = serde_json::to_value(&details.parameters).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "object",
            "properties": {
                "FactoryName": { "type": "string", "description": "The name of the factory" },
                "Category": { "type": "string", "description": "Category", "enum": ["foo", "bar"] },
                "InventoryLevels": {
                    "type": "array",
                    "description": "InventoryLevels",
                    "items": { "type": "integer" }
                },
                "Operational": { "type": "boolean" }
            },
            "required": ["FactoryName", "Category", "InventoryLevels", "Operational"]
        })
    );
}

#[test]
fn sample_function_lists_both_parameters() {
    let details = translate(fixture("widgets"), "SampleFunction").unwrap();
    assert_eq!(
        details.description,
        "SampleFunction is a function that exists to serve as an example."
    );

    let params = details.parameters;
    assert_eq!(params.data_type, DataType::Object);
    assert_eq!(params.required, vec!["a", "b"]);
    assert_eq!(params.properties["a"], Definition::new(DataType::String));
    assert_eq!(params.properties["b"], Definition::new(DataType::Integer));
}

#[test]
fn inline_struct_fields_keep_comments_and_tags() {
    let details = translate(fixture("widgets"), "SampleFunctionB").unwrap();
    let props = &details.parameters.properties;

    assert_eq!(props["FieldA"].description, "Field A is great! This is after the fact.");
    assert_eq!(props["FieldB"].description, "Field B rocks.");
    assert_eq!(props["FieldB"].enum_values, vec!["foo", "bar"]);
    assert_eq!(
        props["FieldC"],
        Definition::array(Definition::new(DataType::Integer)).with_description("Field C broh")
    );
    assert_eq!(details.parameters.required, vec!["FieldA", "FieldB", "FieldC"]);
}

#[test]
fn methods_and_missing_functions_are_not_found() {
    for name in ["Retool", "DoesNotExist", ""] {
        let err = translate(fixture("widgets"), name).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound, "name: {name:?}");
    }
}

#[test]
fn widget_schema_validates_instances() {
    let details = translate(fixture("widgets"), "NewWidgetFactory").unwrap();
    let schema = serde_json::to_value(&details.parameters).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should compile");

    assert!(validator.is_valid(&json!({
        "FactoryName": "north",
        "Category": "bar",
        "InventoryLevels": [4, 2],
        "Operational": true
    })));
    assert!(!validator.is_valid(&json!({
        "FactoryName": "north",
        "Category": "baz",
        "InventoryLevels": [],
        "Operational": true
    })));
}

// ── Edge cases ─────────────────────────────────────────────────

#[test]
fn zero_parameters_give_empty_object() {
    let details = translate(fixture("edges"), "Ping").unwrap();
    assert_eq!(
        serde_json::to_value(&details.parameters).unwrap(),
        json!({ "type": "object" })
    );
}

#[test]
fn channel_parameter_is_null_and_siblings_survive() {
    let params = translate(fixture("edges"), "Listen").unwrap().parameters;
    assert_eq!(params.properties["events"], Definition::null());
    assert_eq!(params.properties["label"], Definition::new(DataType::String));
    assert_eq!(params.required, vec!["events", "label"]);
}

#[test]
fn falsey_required_tags_make_fields_optional() {
    let params = translate(fixture("edges"), "Configure").unwrap().parameters;
    assert_eq!(params.required, vec!["Host", "Mode", "Timeout"]);
    assert_eq!(params.properties["Host"].description, "Host to dial.");
    assert_eq!(params.properties["Mode"].enum_values, vec!["fast", "slow"]);
    assert_eq!(params.properties["Timeout"], Definition::null());
}

#[test]
fn variadic_parameter_is_array() {
    let params = translate(fixture("edges"), "Sum").unwrap().parameters;
    assert_eq!(
        params.properties["values"],
        Definition::array(Definition::new(DataType::Number))
    );
}

#[test]
fn malformed_tag_aborts_with_parameter_name() {
    let err = translate(fixture("edges"), "Explode").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TagSyntax);
    assert_eq!(err.parameter(), Some("b"));
}

#[test]
fn undefined_type_aborts() {
    let err = translate(fixture("edges"), "Lookup").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeResolution);
    assert_eq!(err.to_string(), "issue parsing parameter 'w': cannot resolve type 'Widget'");
}

#[test]
fn recursive_struct_follows_cycle_policy() {
    let params = with_options("edges", "Walk", TranslateOptions::default()).unwrap();
    assert_eq!(params.properties["Value"], Definition::new(DataType::Integer));
    assert_eq!(
        params.properties["Next"],
        Definition::null().with_description("recursive reference to Node")
    );

    let strict = TranslateOptions {
        cycles: CyclePolicy::Error,
        ..TranslateOptions::default()
    };
    assert_eq!(
        with_options("edges", "Walk", strict),
        Err(ErrorKind::RecursiveType)
    );
}

#[test]
fn duplicate_functions_follow_duplicate_policy() {
    let first = with_options("mixed", "Run", TranslateOptions::default()).unwrap();
    assert_eq!(first, Definition::new(DataType::Integer));

    let strict = TranslateOptions {
        duplicates: DuplicatePolicy::Error,
        ..TranslateOptions::default()
    };
    assert_eq!(with_options("mixed", "Run", strict), Err(ErrorKind::Ambiguous));

    let err = translate_with(fixture("mixed"), "Run", &LoadOptions::default(), &strict)
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "function 'Run' is declared more than once (at a.go:4, b.go:4)"
    );
}

#[test]
fn missing_package_is_provider_failure() {
    let err = translate(fixture("nowhere"), "Run").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Provider);
}

#[test]
fn package_written_at_runtime_is_translated() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("main.go"),
        "package main\n\n// Greet says hello.\nfunc Greet(name string, times uint8) {}\n",
    )
    .unwrap();

    let details = translate(dir.path(), "Greet").unwrap();
    assert_eq!(details.description, "Greet says hello.");
    assert_eq!(details.parameters.required, vec!["name", "times"]);
    assert_eq!(
        details.parameters.properties["times"],
        Definition::new(DataType::Integer)
    );
}

#[test]
fn generic_instantiation_substitutes_arguments() {
    let details = translate(fixture("generics"), "Store").unwrap();
    let value = serde_json::to_value(&details.parameters).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "object",
            "properties": {
                "entry": {
                    "type": "object",
                    "properties": {
                        "Key": { "type": "string" },
                        "Value": { "type": "integer" }
                    },
                    "required": ["Key", "Value"]
                },
                "extra": { "type": "null" },
                "when": { "type": "null" }
            },
            "required": ["entry", "extra", "when"]
        })
    );
}

#[test]
fn package_types_are_not_shadowed_inside_declared_structs() {
    let details = translate(fixture("generics"), "Tag").unwrap();
    let value = serde_json::to_value(&details.parameters).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "object",
            "properties": {
                "o": {
                    "type": "object",
                    "properties": {
                        "X": {
                            "type": "object",
                            "properties": { "A": { "type": "integer" } },
                            "required": ["A"]
                        }
                    },
                    "required": ["X"]
                },
                "n": { "type": "integer" },
                "v": { "type": "null" }
            },
            "required": ["o", "n", "v"]
        })
    );
}

#[test]
fn recovered_syntax_error_is_provider_failure() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("p.go"), "package p\n\nfunc F(a int {}\n").unwrap();

    let err = translate(dir.path(), "F").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Provider);
}
