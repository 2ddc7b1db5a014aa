use super::validate_payload;
use crate::test_support::sum_schema;
use crate::SchemaDefinition;
use serde_json::{json, Value};
use std::cell::Cell;
use wfcheck_core::{IssueKind, IssueLog, IssueSeverity};
use wfcheck_schema::{CompileError, JsonSchemaValidator, SchemaInstanceValidator, Violation};

const FILE: &str = "workflows/sum_payload.json";

fn sum_definition() -> SchemaDefinition {
    serde_json::from_value(sum_schema()).expect("fixture must decode")
}

#[test]
fn conforming_payload_logs_single_confirmation() {
    let mut log = IssueLog::new();
    let valid = validate_payload(
        &JsonSchemaValidator,
        &json!({ "num1": 5, "num2": 3 }),
        &sum_definition().data,
        FILE,
        &mut log,
    );

    assert!(valid);
    assert_eq!(log.entries().len(), 1);
    assert_eq!(log.entries()[0].severity, IssueSeverity::Info);
    assert_eq!(
        log.entries()[0].message,
        "Payload workflows/sum_payload.json is valid"
    );
}

#[test]
fn missing_property_is_one_violation_naming_it() {
    let mut log = IssueLog::new();
    let valid = validate_payload(
        &JsonSchemaValidator,
        &json!({ "num1": 5 }),
        &sum_definition().data,
        FILE,
        &mut log,
    );

    assert!(!valid);
    assert_eq!(log.error_count(), 1);
    let issue = &log.entries()[0];
    assert_eq!(issue.kind, IssueKind::PayloadValidation);
    assert!(issue.message.contains("num2"));
    assert!(issue.field_path.is_root());
}

#[test]
fn each_violation_is_logged_with_its_pointer() {
    let mut log = IssueLog::new();
    let valid = validate_payload(
        &JsonSchemaValidator,
        &json!({ "num1": "five", "num2": false }),
        &sum_definition().data,
        FILE,
        &mut log,
    );

    assert!(!valid);
    assert_eq!(log.error_count(), 2);
    let paths = log
        .entries()
        .iter()
        .map(|issue| issue.field_path.to_string())
        .collect::<Vec<_>>();
    assert_eq!(paths, vec!["$.num1", "$.num2"]);
}

#[test]
fn uncompilable_body_is_compile_error() {
    let mut raw = sum_schema();
    raw["data"]["properties"]["num1"] = json!({ "type": "decimal" });
    let definition: SchemaDefinition = serde_json::from_value(raw).expect("fixture must decode");

    let mut log = IssueLog::new();
    let valid = validate_payload(
        &JsonSchemaValidator,
        &json!({ "num1": 5, "num2": 3 }),
        &definition.data,
        FILE,
        &mut log,
    );

    assert!(!valid);
    assert_eq!(log.error_count(), 1);
    assert_eq!(log.entries()[0].kind, IssueKind::Compile);
}

struct CountingValidator {
    compiles: Cell<usize>,
}

impl SchemaInstanceValidator for CountingValidator {
    type Compiled = ();

    fn compile(&self, _schema: &Value) -> Result<(), CompileError> {
        self.compiles.set(self.compiles.get() + 1);
        Ok(())
    }

    fn execute(&self, _compiled: &(), _instance: &Value) -> Vec<Violation> {
        vec![
            Violation {
                path: "/a".to_string(),
                message: "first".to_string(),
            },
            Violation {
                path: String::new(),
                message: "second".to_string(),
            },
        ]
    }
}

#[test]
fn body_is_compiled_once_and_violations_are_forwarded() {
    let validator = CountingValidator {
        compiles: Cell::new(0),
    };

    let mut log = IssueLog::new();
    let valid = validate_payload(&validator, &json!({}), &sum_definition().data, FILE, &mut log);

    assert!(!valid);
    assert_eq!(validator.compiles.get(), 1);
    let messages = log
        .entries()
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        messages,
        vec![
            "Payload workflows/sum_payload.json failed validation at /a: first",
            "Payload workflows/sum_payload.json failed validation at /: second",
        ]
    );
}
