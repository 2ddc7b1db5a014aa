mod cross_reference;
mod payload;
mod schema;
mod workflow;

pub use cross_reference::validate_cross_references;
pub use payload::validate_payload;
pub use schema::{
    validate_schema_definition, REQUIRED_SCHEMA_BODY_FIELDS, REQUIRED_SCHEMA_FIELDS,
    SCHEMA_DOCUMENT_TYPE,
};
pub use workflow::{validate_workflow_definition, REQUIRED_TASK_FIELDS, REQUIRED_WORKFLOW_FIELDS};

use serde_json::{Map, Value};

fn missing_fields<'a>(object: &Map<String, Value>, required: &[&'a str]) -> Vec<&'a str> {
    required
        .iter()
        .copied()
        .filter(|field| !object.contains_key(*field))
        .collect()
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
