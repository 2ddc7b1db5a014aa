pub mod field_path;
pub mod issues;
pub mod log;

pub use field_path::{FieldPath, FieldPathSegment};
pub use issues::{IssueKind, IssueSeverity, StructuredIssue};
pub use log::IssueLog;
