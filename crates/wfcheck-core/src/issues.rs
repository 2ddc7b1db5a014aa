use crate::field_path::FieldPath;
use serde::Serialize;
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Discovery,
    Parse,
    Structural,
    CrossReference,
    PayloadValidation,
    Compile,
    Config,
    Summary,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Discovery => "discovery",
            IssueKind::Parse => "parse",
            IssueKind::Structural => "structural",
            IssueKind::CrossReference => "cross_reference",
            IssueKind::PayloadValidation => "payload_validation",
            IssueKind::Compile => "compile",
            IssueKind::Config => "config",
            IssueKind::Summary => "summary",
        }
    }
}

impl Display for IssueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredIssue {
    pub kind: IssueKind,
    pub severity: IssueSeverity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub field_path: FieldPath,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related: Option<Value>,
}

impl StructuredIssue {
    pub fn new(kind: IssueKind, severity: IssueSeverity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            file: None,
            field_path: FieldPath::root(),
            message: message.into(),
            reference: None,
            related: None,
        }
    }

    pub fn error(kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(kind, IssueSeverity::Error, message)
    }

    pub fn warning(kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(kind, IssueSeverity::Warning, message)
    }

    pub fn info(kind: IssueKind, message: impl Into<String>) -> Self {
        Self::new(kind, IssueSeverity::Info, message)
    }

    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn at(mut self, field_path: FieldPath) -> Self {
        self.field_path = field_path;
        self
    }

    pub fn with_reference(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }

    pub fn with_related(mut self, related: Value) -> Self {
        self.related = Some(related);
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == IssueSeverity::Warning
    }

    pub fn sort_stable(issues: &mut [StructuredIssue]) {
        issues.sort_by(|left, right| {
            left.file
                .cmp(&right.file)
                .then_with(|| left.field_path.cmp(&right.field_path))
                .then_with(|| left.severity.cmp(&right.severity))
                .then_with(|| left.reference.cmp(&right.reference))
        });
    }
}

#[cfg(test)]
#[path = "issues_test.rs"]
mod tests;
