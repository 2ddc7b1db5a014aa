use super::missing_fields;
use crate::documents::WorkflowDefinition;
use serde_json::{json, Value};
use wfcheck_core::{FieldPath, IssueKind, IssueLog, StructuredIssue};

pub const REQUIRED_WORKFLOW_FIELDS: [&str; 4] = ["name", "version", "tasks", "inputParameters"];
pub const REQUIRED_TASK_FIELDS: [&str; 3] = ["name", "taskReferenceName", "type"];

pub fn validate_workflow_definition(
    raw: &Value,
    file: &str,
    log: &mut IssueLog,
) -> Option<WorkflowDefinition> {
    let Some(object) = raw.as_object() else {
        log.record(structural(
            file,
            FieldPath::root(),
            format!("Workflow {file} must be a JSON object"),
            "workflow.object",
        ));
        return None;
    };

    let missing = missing_fields(object, &REQUIRED_WORKFLOW_FIELDS);
    if !missing.is_empty() {
        log.record(
            structural(
                file,
                FieldPath::root(),
                format!(
                    "Workflow {file} is missing required fields: {}",
                    missing.join(", ")
                ),
                "workflow.required_fields",
            )
            .with_related(json!({ "missing": missing })),
        );
        return None;
    }

    let mut valid = true;

    match object.get("name").and_then(Value::as_str) {
        Some(name) if !name.trim().is_empty() => {}
        _ => {
            valid = false;
            log.record(structural(
                file,
                FieldPath::root().key("name"),
                format!("Workflow {file} must have a non-empty string `name`"),
                "workflow.name",
            ));
        }
    }

    let version_ok = match object.get("version") {
        Some(Value::Number(_)) => true,
        Some(Value::String(text)) => !text.trim().is_empty(),
        _ => false,
    };
    if !version_ok {
        valid = false;
        log.record(structural(
            file,
            FieldPath::root().key("version"),
            format!("Workflow {file} must have a non-empty `version` (number or string)"),
            "workflow.version",
        ));
    }

    match object.get("inputParameters") {
        Some(Value::Array(inputs)) => {
            for (index, input) in inputs.iter().enumerate() {
                if !input.is_string() {
                    valid = false;
                    log.record(structural(
                        file,
                        FieldPath::root().key("inputParameters").index(index),
                        format!(
                            "Workflow {file} input parameter #{index} must be a string, got {input}"
                        ),
                        "workflow.input_parameter",
                    ));
                }
            }
        }
        _ => {
            valid = false;
            log.record(structural(
                file,
                FieldPath::root().key("inputParameters"),
                format!("Workflow {file} `inputParameters` must be an array of names"),
                "workflow.input_parameters",
            ));
        }
    }

    match object.get("tasks") {
        Some(Value::Array(tasks)) => {
            for (index, task) in tasks.iter().enumerate() {
                if !check_task(task, index, file, log) {
                    valid = false;
                }
            }
        }
        _ => {
            valid = false;
            log.record(structural(
                file,
                FieldPath::root().key("tasks"),
                format!("Workflow {file} `tasks` must be an array"),
                "workflow.tasks",
            ));
        }
    }

    if !valid {
        return None;
    }

    match serde_json::from_value::<WorkflowDefinition>(raw.clone()) {
        Ok(workflow) => Some(workflow),
        Err(err) => {
            log.record(structural(
                file,
                FieldPath::root(),
                format!("Workflow {file} could not be read as a workflow definition: {err}"),
                "workflow.typed_parse",
            ));
            None
        }
    }
}

fn check_task(task: &Value, index: usize, file: &str, log: &mut IssueLog) -> bool {
    let path = FieldPath::root().key("tasks").index(index);
    let Some(task_obj) = task.as_object() else {
        log.record(structural(
            file,
            path,
            format!("Task #{index} in workflow {file} must be a JSON object"),
            "workflow.task.object",
        ));
        return false;
    };

    let missing = missing_fields(task_obj, &REQUIRED_TASK_FIELDS);
    if !missing.is_empty() {
        let task_name = task_obj
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or("<unnamed>");
        log.record(
            structural(
                file,
                path,
                format!(
                    "Task #{index} ({task_name}) in workflow {file} is missing required fields: {}",
                    missing.join(", ")
                ),
                "workflow.task.required_fields",
            )
            .with_related(json!({ "task_index": index, "missing": missing })),
        );
        return false;
    }

    let mut valid = true;
    for field in REQUIRED_TASK_FIELDS {
        if !task_obj.get(field).is_some_and(Value::is_string) {
            valid = false;
            log.record(structural(
                file,
                path.clone().key(field),
                format!("Task #{index} in workflow {file} field `{field}` must be a string"),
                "workflow.task.field_type",
            ));
        }
    }

    if let Some(params) = task_obj.get("inputParameters") {
        if !params.is_object() {
            valid = false;
            log.record(structural(
                file,
                path.key("inputParameters"),
                format!("Task #{index} in workflow {file} `inputParameters` must be an object"),
                "workflow.task.input_parameters",
            ));
        }
    }

    valid
}

fn structural(file: &str, path: FieldPath, message: String, reference: &str) -> StructuredIssue {
    StructuredIssue::error(IssueKind::Structural, message)
        .in_file(file)
        .at(path)
        .with_reference(reference)
}

#[cfg(test)]
#[path = "workflow_test.rs"]
mod tests;
