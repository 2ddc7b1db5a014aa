use super::{SchemaBody, SchemaDefinition};
use crate::DocumentVersion;
use serde_json::json;

#[test]
fn schema_body_keeps_raw_document_for_compilation() {
    let data = json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "properties": { "num1": { "type": "number" } },
        "additionalProperties": false
    });

    let body: SchemaBody = serde_json::from_value(data.clone()).expect("must decode");
    assert!(body.has_property("num1"));
    assert!(body.required.is_empty());
    assert_eq!(body.raw(), &data);
    assert_eq!(serde_json::to_value(&body).expect("must encode"), data);
}

#[test]
fn schema_definition_accepts_numeric_version() {
    let definition: SchemaDefinition = serde_json::from_value(json!({
        "name": "sum_input",
        "version": 1,
        "type": "JSON",
        "data": {
            "$schema": "http://json-schema.org/draft-07/schema#",
            "type": "object",
            "properties": {},
            "required": []
        }
    }))
    .expect("must decode");

    assert_eq!(definition.version, DocumentVersion::Number(1.into()));
    assert_eq!(definition.version.to_string(), "1");
}
