use crate::documents::SchemaBody;
use serde_json::{json, Value};
use wfcheck_core::{FieldPath, IssueKind, IssueLog, StructuredIssue};
use wfcheck_schema::SchemaInstanceValidator;

pub fn validate_payload<V: SchemaInstanceValidator>(
    validator: &V,
    payload: &Value,
    body: &SchemaBody,
    payload_file: &str,
    log: &mut IssueLog,
) -> bool {
    let compiled = match validator.compile(body.raw()) {
        Ok(compiled) => compiled,
        Err(err) => {
            log.record(
                StructuredIssue::error(
                    IssueKind::Compile,
                    format!("Error validating payload {payload_file}: {err}"),
                )
                .in_file(payload_file)
                .at(FieldPath::root().key("data"))
                .with_reference("payload.schema_compile_failed"),
            );
            return false;
        }
    };

    let violations = validator.execute(&compiled, payload);
    if violations.is_empty() {
        log.record(
            StructuredIssue::info(
                IssueKind::PayloadValidation,
                format!("Payload {payload_file} is valid"),
            )
            .in_file(payload_file),
        );
        return true;
    }

    for violation in violations {
        let location = if violation.path.is_empty() {
            "/"
        } else {
            violation.path.as_str()
        };
        log.record(
            StructuredIssue::error(
                IssueKind::PayloadValidation,
                format!(
                    "Payload {payload_file} failed validation at {location}: {}",
                    violation.message
                ),
            )
            .in_file(payload_file)
            .at(FieldPath::from_json_pointer(violation.path.as_str()))
            .with_reference("payload.schema_violation")
            .with_related(json!({ "pointer": violation.path })),
        );
    }
    false
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
