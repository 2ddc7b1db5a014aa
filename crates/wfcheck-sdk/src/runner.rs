use crate::io::{DocumentStore, ReadError};
use crate::locate::{locate_document_sets, DocumentSet, LocateOptions};
use crate::report::{SetOutcome, SetState, ValidationReport};
use crate::validate::{
    validate_cross_references, validate_payload, validate_schema_definition,
    validate_workflow_definition,
};
use serde_json::Value;
use std::path::Path;
use wfcheck_core::{IssueKind, IssueLog, StructuredIssue};
use wfcheck_schema::SchemaInstanceValidator;

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("validation root does not exist: {path}")]
    RootNotFound { path: String },
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub jobs: usize,
    pub locate: LocateOptions,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            jobs: 1,
            locate: LocateOptions::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ValidationRunner<S, V> {
    store: S,
    validator: V,
    options: RunOptions,
}

impl<S, V> ValidationRunner<S, V>
where
    S: DocumentStore + Sync,
    V: SchemaInstanceValidator + Sync,
{
    pub fn new(store: S, validator: V) -> Self {
        Self {
            store,
            validator,
            options: RunOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    pub fn run(&self, root: &Path) -> Result<ValidationReport, RunError> {
        if !self.store.exists(root) {
            return Err(RunError::RootNotFound {
                path: root.display().to_string(),
            });
        }

        let mut discovery = IssueLog::new();
        let sets = locate_document_sets(&self.store, root, &self.options.locate, &mut discovery);
        tracing::debug!(root = %root.display(), sets = sets.len(), "discovery finished");

        if sets.is_empty() {
            discovery.record(
                StructuredIssue::warning(
                    IssueKind::Discovery,
                    format!(
                        "No complete workflow sets found under {}. Each workflow needs a matching _schema.json file.",
                        root.display()
                    ),
                )
                .in_file(root.display().to_string())
                .with_reference("discovery.no_sets"),
            );
        }

        let outcomes = self.validate_sets(&sets);
        Ok(ValidationReport {
            root: root.to_path_buf(),
            discovery: discovery.into_entries(),
            sets: outcomes,
        })
    }

    pub fn validate_set(&self, set: &DocumentSet) -> SetOutcome {
        let mut log = IssueLog::new();
        let mut state = SetState::Discovered;
        let has_payload = set.payload.is_some();

        let passed = self.run_stages(set, &mut state, &mut log);
        let outcome = if passed {
            log.record(StructuredIssue::info(
                IssueKind::Summary,
                format!("All validations passed for workflow set: {}", set.base_name),
            ));
            SetOutcome {
                set: set.clone(),
                state: SetState::Passed,
                failed_after: None,
                issues: log.into_entries(),
            }
        } else {
            SetOutcome {
                set: set.clone(),
                state: SetState::Failed,
                failed_after: Some(state),
                issues: log.into_entries(),
            }
        };

        tracing::info!(
            set = %set.base_name,
            passed = outcome.passed(),
            has_payload,
            "document set validated"
        );
        outcome
    }

    fn run_stages(&self, set: &DocumentSet, state: &mut SetState, log: &mut IssueLog) -> bool {
        let has_payload = set.payload.is_some();
        let workflow_file = set.workflow.display().to_string();
        let schema_file = set.schema.display().to_string();

        let Some(raw_workflow) = self.read_document(set.workflow.as_path(), log) else {
            return false;
        };
        let Some(workflow) = validate_workflow_definition(&raw_workflow, &workflow_file, log)
        else {
            return false;
        };
        self.advance(set, state, has_payload);

        let Some(raw_schema) = self.read_document(set.schema.as_path(), log) else {
            return false;
        };
        let Some(schema) =
            validate_schema_definition(&raw_schema, &schema_file, Some(&workflow), log)
        else {
            return false;
        };
        self.advance(set, state, has_payload);

        if !validate_cross_references(&workflow, &schema, set, log) {
            return false;
        }
        self.advance(set, state, has_payload);

        if let Some(payload_path) = &set.payload {
            let Some(payload) = self.read_document(payload_path.as_path(), log) else {
                return false;
            };
            let payload_file = payload_path.display().to_string();
            if !validate_payload(&self.validator, &payload, &schema.data, &payload_file, log) {
                return false;
            }
            self.advance(set, state, has_payload);
        }

        true
    }

    fn advance(&self, set: &DocumentSet, state: &mut SetState, has_payload: bool) {
        *state = state.next(has_payload);
        tracing::debug!(set = %set.base_name, state = ?state, "stage passed");
    }

    fn read_document(&self, path: &Path, log: &mut IssueLog) -> Option<Value> {
        match self.store.read_json(path) {
            Ok(value) => Some(value),
            Err(err) => {
                let reference = match err {
                    ReadError::Io { .. } => "document.read_failed",
                    ReadError::Parse { .. } => "document.parse_error",
                };
                log.record(
                    StructuredIssue::error(IssueKind::Parse, err.to_string())
                        .in_file(err.path())
                        .with_reference(reference),
                );
                None
            }
        }
    }

    fn validate_sets(&self, sets: &[DocumentSet]) -> Vec<SetOutcome> {
        let jobs = self.options.jobs.clamp(1, sets.len().max(1));
        if jobs == 1 {
            return sets.iter().map(|set| self.validate_set(set)).collect();
        }

        // Chunks keep discovery order; each worker returns its outcomes and
        // results are concatenated after every worker has joined.
        let chunk_size = sets.len().div_ceil(jobs);
        std::thread::scope(|scope| {
            let handles = sets
                .chunks(chunk_size)
                .map(|chunk| {
                    scope.spawn(move || {
                        chunk
                            .iter()
                            .map(|set| self.validate_set(set))
                            .collect::<Vec<_>>()
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .flat_map(|handle| {
                    handle
                        .join()
                        .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
                })
                .collect()
        })
    }
}

#[cfg(test)]
#[path = "runner_test.rs"]
mod tests;
