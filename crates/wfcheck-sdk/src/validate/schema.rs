use super::{describe_value, missing_fields};
use crate::documents::{SchemaDefinition, WorkflowDefinition};
use serde_json::{json, Value};
use wfcheck_core::{FieldPath, IssueKind, IssueLog, StructuredIssue};

pub const REQUIRED_SCHEMA_FIELDS: [&str; 4] = ["name", "version", "type", "data"];
pub const REQUIRED_SCHEMA_BODY_FIELDS: [&str; 3] = ["$schema", "type", "properties"];
pub const SCHEMA_DOCUMENT_TYPE: &str = "JSON";

pub fn validate_schema_definition(
    raw: &Value,
    file: &str,
    owner: Option<&WorkflowDefinition>,
    log: &mut IssueLog,
) -> Option<SchemaDefinition> {
    let Some(object) = raw.as_object() else {
        log.record(structural(
            file,
            FieldPath::root(),
            format!("Schema {file} must be a JSON object"),
            "schema.object",
        ));
        return None;
    };

    let missing = missing_fields(object, &REQUIRED_SCHEMA_FIELDS);
    if !missing.is_empty() {
        log.record(
            structural(
                file,
                FieldPath::root(),
                format!(
                    "Schema {file} is missing required fields: {}",
                    missing.join(", ")
                ),
                "schema.required_fields",
            )
            .with_related(json!({ "missing": missing })),
        );
        return None;
    }

    let schema_type = object.get("type").unwrap_or(&Value::Null);
    if schema_type.as_str() != Some(SCHEMA_DOCUMENT_TYPE) {
        log.record(structural(
            file,
            FieldPath::root().key("type"),
            format!(
                "Schema {file} has invalid type. Expected '{SCHEMA_DOCUMENT_TYPE}', got '{}'",
                describe_value(schema_type)
            ),
            "schema.type",
        ));
        return None;
    }

    let Some(body) = object.get("data").and_then(Value::as_object) else {
        log.record(structural(
            file,
            FieldPath::root().key("data"),
            format!("Schema {file} `data` must be a JSON Schema object"),
            "schema.data.object",
        ));
        return None;
    };

    let absent = REQUIRED_SCHEMA_BODY_FIELDS
        .iter()
        .copied()
        .filter(|field| is_blank(body.get(*field)))
        .collect::<Vec<_>>();
    if !absent.is_empty() {
        log.record(
            structural(
                file,
                FieldPath::root().key("data"),
                format!(
                    "Schema {file} has invalid JSON Schema structure in data field: missing {}",
                    absent.join(", ")
                ),
                "schema.data.structure",
            )
            .with_related(json!({ "missing": absent })),
        );
        return None;
    }

    if !body.get("properties").is_some_and(Value::is_object) {
        log.record(structural(
            file,
            FieldPath::root().key("data").key("properties"),
            format!("Schema {file} `data.properties` must be an object"),
            "schema.data.properties",
        ));
        return None;
    }

    let schema = match serde_json::from_value::<SchemaDefinition>(raw.clone()) {
        Ok(schema) => schema,
        Err(err) => {
            log.record(structural(
                file,
                FieldPath::root(),
                format!("Schema {file} could not be read as a schema definition: {err}"),
                "schema.typed_parse",
            ));
            return None;
        }
    };

    if let Some(workflow) = owner {
        let expected = workflow.expected_schema_name();
        if schema.name != expected {
            log.record(
                StructuredIssue::warning(
                    IssueKind::Structural,
                    format!(
                        "Schema {file} name '{}' does not match expected '{expected}' for workflow '{}'",
                        schema.name, workflow.name
                    ),
                )
                .in_file(file)
                .at(FieldPath::root().key("name"))
                .with_reference("schema.name_mismatch")
                .with_related(json!({ "expected": expected, "actual": schema.name })),
            );
        }
    }

    Some(schema)
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}

fn structural(file: &str, path: FieldPath, message: String, reference: &str) -> StructuredIssue {
    StructuredIssue::error(IssueKind::Structural, message)
        .in_file(file)
        .at(path)
        .with_reference(reference)
}

#[cfg(test)]
#[path = "schema_test.rs"]
mod tests;
