use crate::io::DocumentStore;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use wfcheck_core::{IssueKind, IssueLog, StructuredIssue};

pub const SCHEMA_SUFFIX: &str = "_schema.json";
pub const PAYLOAD_SUFFIX: &str = "_payload.json";

pub const PACKAGE_MANIFESTS: &[&str] = &[
    "package.json",
    "package-lock.json",
    "npm-shrinkwrap.json",
    "composer.json",
    "bower.json",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSet {
    pub base_name: String,
    pub workflow: PathBuf,
    pub schema: PathBuf,
    pub payload: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct LocateOptions {
    pub exclude_files: Vec<String>,
}

pub fn locate_document_sets<S: DocumentStore + ?Sized>(
    store: &S,
    root: &Path,
    options: &LocateOptions,
    log: &mut IssueLog,
) -> Vec<DocumentSet> {
    let files = match store.list_json_files(root) {
        Ok(files) => files,
        Err(err) => {
            log.record(
                StructuredIssue::error(
                    IssueKind::Discovery,
                    format!("Error listing {}: {err}", root.display()),
                )
                .in_file(root.display().to_string())
                .with_reference("discovery.list_failed"),
            );
            return Vec::new();
        }
    };

    let mut sets = Vec::new();
    for workflow in files {
        let Some(file_name) = workflow.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if !is_workflow_candidate(file_name, options) {
            continue;
        }
        let Some(base_name) = file_name.strip_suffix(".json").map(str::to_string) else {
            continue;
        };

        let schema = workflow.with_file_name(format!("{base_name}{SCHEMA_SUFFIX}"));
        let payload = workflow.with_file_name(format!("{base_name}{PAYLOAD_SUFFIX}"));
        let workflow_file = workflow.display().to_string();

        if !store.exists(schema.as_path()) {
            log.record(
                StructuredIssue::error(
                    IssueKind::Discovery,
                    format!(
                        "Workflow {workflow_file} has no schema file (expected {})",
                        schema.display()
                    ),
                )
                .in_file(workflow_file.clone())
                .with_reference("discovery.schema_missing")
                .with_related(json!({ "expected": schema.display().to_string() })),
            );
            continue;
        }

        let payload = if store.exists(payload.as_path()) {
            Some(payload)
        } else {
            log.record(
                StructuredIssue::warning(
                    IssueKind::Discovery,
                    format!(
                        "Workflow {workflow_file} has no payload file (expected {}); payload validation skipped",
                        payload.display()
                    ),
                )
                .in_file(workflow_file.clone())
                .with_reference("discovery.payload_missing")
                .with_related(json!({ "expected": payload.display().to_string() })),
            );
            None
        };

        tracing::debug!(set = %base_name, workflow = %workflow_file, "located document set");
        sets.push(DocumentSet {
            base_name,
            workflow,
            schema,
            payload,
        });
    }

    sets
}

fn is_workflow_candidate(file_name: &str, options: &LocateOptions) -> bool {
    if file_name.ends_with(SCHEMA_SUFFIX) || file_name.ends_with(PAYLOAD_SUFFIX) {
        return false;
    }
    if PACKAGE_MANIFESTS.contains(&file_name) {
        return false;
    }
    !options
        .exclude_files
        .iter()
        .any(|excluded| excluded == file_name)
}

#[cfg(test)]
#[path = "locate_test.rs"]
mod tests;
