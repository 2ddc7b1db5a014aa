use crate::documents::{SchemaDefinition, WorkflowDefinition};
use crate::locate::DocumentSet;
use crate::reference::scan_input_references;
use serde_json::{json, Value};
use wfcheck_core::{FieldPath, IssueKind, IssueLog, StructuredIssue};

pub fn validate_cross_references(
    workflow: &WorkflowDefinition,
    schema: &SchemaDefinition,
    set: &DocumentSet,
    log: &mut IssueLog,
) -> bool {
    let workflow_file = set.workflow.display().to_string();
    let schema_file = set.schema.display().to_string();
    let mut consistent = true;

    let undefined = workflow
        .input_parameters
        .iter()
        .filter(|input| !schema.data.has_property(input.as_str()))
        .map(String::as_str)
        .collect::<Vec<_>>();
    if !undefined.is_empty() {
        consistent = false;
        log.record(
            StructuredIssue::error(
                IssueKind::CrossReference,
                format!(
                    "Workflow input parameters not defined in schema {schema_file}: {}",
                    undefined.join(", ")
                ),
            )
            .in_file(workflow_file.clone())
            .at(FieldPath::root().key("inputParameters"))
            .with_reference("cross.undefined_inputs")
            .with_related(json!({ "inputs": undefined })),
        );
    }

    let missing = schema
        .data
        .required
        .iter()
        .filter(|property| !workflow.declares_input(property.as_str()))
        .map(String::as_str)
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        consistent = false;
        log.record(
            StructuredIssue::error(
                IssueKind::CrossReference,
                format!(
                    "Required schema properties not in workflow {workflow_file} inputs: {}",
                    missing.join(", ")
                ),
            )
            .in_file(schema_file.clone())
            .at(FieldPath::root().key("data").key("required"))
            .with_reference("cross.missing_inputs")
            .with_related(json!({ "properties": missing })),
        );
    }

    for (task_index, task) in workflow.tasks.iter().enumerate() {
        for (parameter, value) in &task.input_parameters {
            let Value::String(text) = value else {
                continue;
            };
            for reference in scan_input_references(text) {
                if workflow.declares_input(reference.name) {
                    continue;
                }
                consistent = false;
                log.record(
                    StructuredIssue::error(
                        IssueKind::CrossReference,
                        format!(
                            "Task \"{}\" references undefined input parameter: {} (in inputParameters.{parameter})",
                            task.name, reference.name
                        ),
                    )
                    .in_file(workflow_file.clone())
                    .at(FieldPath::root()
                        .key("tasks")
                        .index(task_index)
                        .key("inputParameters")
                        .key(parameter.clone()))
                    .with_reference("cross.unresolved_reference")
                    .with_related(json!({
                        "task": task.name,
                        "taskReferenceName": task.task_reference_name,
                        "parameter": parameter,
                        "input": reference.name
                    })),
                );
            }
        }
    }

    consistent
}

#[cfg(test)]
#[path = "cross_reference_test.rs"]
mod tests;
