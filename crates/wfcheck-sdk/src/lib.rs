pub mod documents;
pub mod io;
pub mod locate;
pub mod reference;
pub mod report;
pub mod runner;
pub mod validate;

#[cfg(test)]
mod test_support;

pub use documents::{DocumentVersion, SchemaBody, SchemaDefinition, TaskSpec, WorkflowDefinition};
pub use io::{DocumentStore, FsDocumentStore, ReadError};
pub use locate::{
    locate_document_sets, DocumentSet, LocateOptions, PACKAGE_MANIFESTS, PAYLOAD_SUFFIX,
    SCHEMA_SUFFIX,
};
pub use reference::{scan_input_references, InputReference};
pub use report::{
    render_report_json, render_report_text, ReportSummary, SetOutcome, SetState, ValidationReport,
};
pub use runner::{RunError, RunOptions, ValidationRunner};
pub use validate::{
    validate_cross_references, validate_payload, validate_schema_definition,
    validate_workflow_definition,
};
