use super::{IssueKind, IssueSeverity, StructuredIssue};
use crate::FieldPath;
use serde_json::json;

#[test]
fn builder_sets_location_and_reference() {
    let issue = StructuredIssue::error(IssueKind::Structural, "missing name")
        .in_file("workflows/sum.json")
        .at(FieldPath::root().key("name"))
        .with_reference("workflow.required_fields");

    assert!(issue.is_error());
    assert!(!issue.is_warning());
    assert_eq!(issue.file.as_deref(), Some("workflows/sum.json"));
    assert_eq!(issue.field_path.to_string(), "$.name");
    assert_eq!(issue.reference.as_deref(), Some("workflow.required_fields"));
}

#[test]
fn serialized_issue_omits_empty_context() {
    let issue = StructuredIssue::warning(IssueKind::Discovery, "no payload");
    let encoded = serde_json::to_value(&issue).expect("must encode");
    assert_eq!(
        encoded,
        json!({
            "kind": "discovery",
            "severity": "warning",
            "field_path": "$",
            "message": "no payload"
        })
    );
}

#[test]
fn severity_orders_errors_first() {
    assert!(IssueSeverity::Error < IssueSeverity::Warning);
    assert!(IssueSeverity::Warning < IssueSeverity::Info);
    assert_eq!(IssueKind::CrossReference.to_string(), "cross_reference");
}

#[test]
fn sort_stable_groups_by_file_and_path() {
    let mut issues = vec![
        StructuredIssue::error(IssueKind::Config, "second")
            .in_file("b.yaml")
            .at(FieldPath::root().key("jobs")),
        StructuredIssue::warning(IssueKind::Config, "third")
            .in_file("b.yaml")
            .at(FieldPath::root().key("jobs")),
        StructuredIssue::error(IssueKind::Config, "first")
            .in_file("a.yaml")
            .at(FieldPath::root().key("schema")),
        StructuredIssue::error(IssueKind::Config, "fourth")
            .in_file("b.yaml")
            .at(FieldPath::root().key("jobs")),
    ];

    StructuredIssue::sort_stable(&mut issues);

    let messages = issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>();
    assert_eq!(messages, vec!["first", "second", "fourth", "third"]);
}
