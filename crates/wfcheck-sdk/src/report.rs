use crate::locate::DocumentSet;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use wfcheck_core::{IssueSeverity, StructuredIssue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetState {
    Discovered,
    WorkflowChecked,
    SchemaChecked,
    CrossChecked,
    PayloadChecked,
    Passed,
    Failed,
}

impl SetState {
    pub fn next(self, has_payload: bool) -> SetState {
        match self {
            SetState::Discovered => SetState::WorkflowChecked,
            SetState::WorkflowChecked => SetState::SchemaChecked,
            SetState::SchemaChecked => SetState::CrossChecked,
            SetState::CrossChecked if has_payload => SetState::PayloadChecked,
            SetState::CrossChecked | SetState::PayloadChecked => SetState::Passed,
            SetState::Passed => SetState::Passed,
            SetState::Failed => SetState::Failed,
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, SetState::Passed | SetState::Failed)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetOutcome {
    pub set: DocumentSet,
    pub state: SetState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_after: Option<SetState>,
    pub issues: Vec<StructuredIssue>,
}

impl SetOutcome {
    pub fn passed(&self) -> bool {
        self.state == SetState::Passed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total_sets: usize,
    pub passed_sets: usize,
    pub failed_sets: usize,
    pub errors: usize,
    pub warnings: usize,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub root: PathBuf,
    pub discovery: Vec<StructuredIssue>,
    pub sets: Vec<SetOutcome>,
}

impl ValidationReport {
    pub fn issues(&self) -> impl Iterator<Item = &StructuredIssue> {
        self.discovery
            .iter()
            .chain(self.sets.iter().flat_map(|outcome| outcome.issues.iter()))
    }

    pub fn errors(&self) -> Vec<&StructuredIssue> {
        self.issues().filter(|issue| issue.is_error()).collect()
    }

    pub fn warnings(&self) -> Vec<&StructuredIssue> {
        self.issues().filter(|issue| issue.is_warning()).collect()
    }

    // Zero sets or a discovery error fail the run.
    pub fn passed(&self) -> bool {
        !self.sets.is_empty()
            && self.sets.iter().all(SetOutcome::passed)
            && !self.discovery.iter().any(StructuredIssue::is_error)
    }

    pub fn summary(&self) -> ReportSummary {
        let passed_sets = self.sets.iter().filter(|outcome| outcome.passed()).count();
        ReportSummary {
            total_sets: self.sets.len(),
            passed_sets,
            failed_sets: self.sets.len() - passed_sets,
            errors: self.errors().len(),
            warnings: self.warnings().len(),
            passed: self.passed(),
        }
    }
}

pub fn render_report_text(report: &ValidationReport) -> String {
    let mut lines = Vec::<String>::new();
    lines.extend(report.discovery.iter().map(issue_line));
    for outcome in &report.sets {
        lines.push(String::new());
        lines.push(format!("Validating workflow set: {}", outcome.set.base_name));
        lines.extend(outcome.issues.iter().map(issue_line));
    }

    let summary = report.summary();
    lines.push(String::new());
    lines.push("=== Validation Summary ===".to_string());
    lines.push(format!("Total Workflow Sets: {}", summary.total_sets));
    lines.push(format!("Passed: {}", summary.passed_sets));
    lines.push(format!("Failed: {}", summary.failed_sets));
    lines.push(format!("Errors: {}", summary.errors));
    lines.push(format!("Warnings: {}", summary.warnings));

    for (title, issues) in [("Errors:", report.errors()), ("Warnings:", report.warnings())] {
        if issues.is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(title.to_string());
        lines.extend(issues.iter().map(|issue| format!("  - {}", issue.message)));
    }

    let verdict = if summary.passed { "PASSED" } else { "FAILED" };
    lines.push(String::new());
    lines.push(format!("Result: {verdict}"));
    lines.join("\n")
}

pub fn render_report_json(report: &ValidationReport) -> Value {
    json!({
        "root": report.root.display().to_string(),
        "summary": report.summary(),
        "discovery": report.discovery,
        "sets": report.sets,
    })
}

fn issue_line(issue: &StructuredIssue) -> String {
    let marker = match issue.severity {
        IssueSeverity::Error => "[error]",
        IssueSeverity::Warning => "[warn]",
        IssueSeverity::Info => "[ok]",
    };
    format!("{marker} {}", issue.message)
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
