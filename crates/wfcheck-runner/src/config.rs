use crate::cli::OutputFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use wfcheck_core::{FieldPath, IssueKind, StructuredIssue};

pub const RUNNER_CONFIG_SCHEMA: &str = "wfcheck-runner/0.0.1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunnerConfig {
    #[serde(default = "default_runner_schema")]
    pub schema: String,
    #[serde(default)]
    pub root: Option<PathBuf>,
    #[serde(default = "default_jobs")]
    pub jobs: usize,
    #[serde(default)]
    pub exclude_files: Vec<String>,
    #[serde(default)]
    pub exclude_dirs: Vec<String>,
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            schema: default_runner_schema(),
            root: None,
            jobs: default_jobs(),
            exclude_files: Vec::new(),
            exclude_dirs: Vec::new(),
            format: OutputFormat::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerConfigError {
    #[error("read runner config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("runner config parse failed: {0}")]
    Parse(String),
    #[error("runner config validation failed: {}", describe_issues(.0))]
    Validation(Vec<StructuredIssue>),
}

pub fn load_runner_config(path: &Path) -> Result<RunnerConfig, RunnerConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| RunnerConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let expanded = expand_env_placeholders(raw.as_str()).map_err(RunnerConfigError::Parse)?;
    let config: RunnerConfig = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(expanded.as_str()).map_err(|error| {
            RunnerConfigError::Parse(format!("json decode error: {error}"))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(expanded.as_str()).map_err(|error| {
            RunnerConfigError::Parse(format!("yaml decode error: {error}"))
        })?,
        _ => serde_yaml::from_str(expanded.as_str())
            .or_else(|_| serde_json::from_str(expanded.as_str()))
            .map_err(|error| RunnerConfigError::Parse(error.to_string()))?,
    };
    tracing::debug!(path = %path.display(), "runner config loaded");

    let file = path.display().to_string();
    let mut issues = validate_runner_config(&config)
        .into_iter()
        .map(|issue| issue.in_file(file.as_str()))
        .collect::<Vec<_>>();
    StructuredIssue::sort_stable(&mut issues);
    if !issues.is_empty() {
        return Err(RunnerConfigError::Validation(issues));
    }
    Ok(config)
}

pub fn validate_runner_config(config: &RunnerConfig) -> Vec<StructuredIssue> {
    let mut issues = Vec::<StructuredIssue>::new();
    if config.schema != RUNNER_CONFIG_SCHEMA {
        issues.push(config_issue(
            "runner.config.schema",
            FieldPath::root().key("schema"),
            format!(
                "unsupported runner config schema `{}` (expected `{}`)",
                config.schema, RUNNER_CONFIG_SCHEMA
            ),
        ));
    }
    if config.jobs == 0 {
        issues.push(config_issue(
            "runner.config.jobs",
            FieldPath::root().key("jobs"),
            "jobs must be >= 1".to_string(),
        ));
    }
    if let Some(root) = &config.root {
        if root.as_os_str().is_empty() {
            issues.push(config_issue(
                "runner.config.root",
                FieldPath::root().key("root"),
                "root must not be empty".to_string(),
            ));
        }
    }

    for (index, name) in config.exclude_files.iter().enumerate() {
        let path = FieldPath::root().key("exclude_files").index(index);
        if name.trim().is_empty() {
            issues.push(config_issue(
                "runner.config.exclude_files.non_empty",
                path,
                "exclude_files entries must not be empty".to_string(),
            ));
        } else if name.contains('/') || name.contains('\\') {
            issues.push(config_issue(
                "runner.config.exclude_files.file_name",
                path,
                format!("exclude_files entry `{name}` must be a bare file name"),
            ));
        }
    }
    for (index, name) in config.exclude_dirs.iter().enumerate() {
        if name.trim().is_empty() {
            issues.push(config_issue(
                "runner.config.exclude_dirs.non_empty",
                FieldPath::root().key("exclude_dirs").index(index),
                "exclude_dirs entries must not be empty".to_string(),
            ));
        }
    }

    issues
}

fn config_issue(reference: &str, path: FieldPath, message: String) -> StructuredIssue {
    StructuredIssue::error(IssueKind::Config, message)
        .at(path)
        .with_reference(reference)
}

fn describe_issues(issues: &[StructuredIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("{}: {}", issue.field_path, issue.message))
        .collect::<Vec<_>>()
        .join("; ")
}

fn default_runner_schema() -> String {
    RUNNER_CONFIG_SCHEMA.to_string()
}

fn default_jobs() -> usize {
    1
}

fn expand_env_placeholders(input: &str) -> Result<String, String> {
    let mut out = String::with_capacity(input.len());
    let mut cursor = 0;
    while let Some(start_offset) = input[cursor..].find("${") {
        let start = cursor + start_offset;
        out.push_str(&input[cursor..start]);
        let var_start = start + 2;
        let Some(end_offset) = input[var_start..].find('}') else {
            return Err("unterminated env placeholder `${...`".to_string());
        };
        let end = var_start + end_offset;
        let key = &input[var_start..end];
        if key.is_empty() {
            return Err("empty env placeholder `${}`".to_string());
        }
        let value = std::env::var(key)
            .map_err(|_| format!("missing env var for placeholder `${{{key}}}`"))?;
        out.push_str(value.as_str());
        cursor = end + 1;
    }
    out.push_str(&input[cursor..]);
    Ok(out)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
