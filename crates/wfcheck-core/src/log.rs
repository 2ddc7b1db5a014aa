use crate::issues::{IssueSeverity, StructuredIssue};

#[derive(Debug, Clone, Default)]
pub struct IssueLog {
    entries: Vec<StructuredIssue>,
}

impl IssueLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, issue: StructuredIssue) {
        self.entries.push(issue);
    }

    pub fn extend(&mut self, issues: impl IntoIterator<Item = StructuredIssue>) {
        self.entries.extend(issues);
    }

    pub fn entries(&self) -> &[StructuredIssue] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<StructuredIssue> {
        self.entries
    }

    pub fn error_count(&self) -> usize {
        self.count(IssueSeverity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(IssueSeverity::Warning)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn count(&self, severity: IssueSeverity) -> usize {
        self.entries
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}

#[cfg(test)]
#[path = "log_test.rs"]
mod tests;
