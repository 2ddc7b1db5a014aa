use crate::cli::{Cli, OutputFormat, DEFAULT_ROOT};
use crate::config::{load_runner_config, validate_runner_config, RunnerConfig, RunnerConfigError};
use std::path::PathBuf;
use wfcheck_core::StructuredIssue;
use wfcheck_schema::JsonSchemaValidator;
use wfcheck_sdk::{
    render_report_json, render_report_text, FsDocumentStore, LocateOptions, RunError, RunOptions,
    ValidationRunner,
};

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] RunnerConfigError),
    #[error(transparent)]
    Run(#[from] RunError),
    #[error("encode json report failed: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub output: String,
    pub passed: bool,
}

pub fn resolve_runner_config(cli: &Cli) -> Result<RunnerConfig, RunnerConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_runner_config(path.as_path())?,
        None => RunnerConfig::default(),
    };
    if let Some(root) = &cli.root {
        config.root = Some(root.clone());
    }
    if let Some(jobs) = cli.jobs {
        config.jobs = jobs;
    }
    if let Some(format) = cli.format {
        config.format = format;
    }

    let mut issues = validate_runner_config(&config);
    StructuredIssue::sort_stable(&mut issues);
    if !issues.is_empty() {
        return Err(RunnerConfigError::Validation(issues));
    }
    Ok(config)
}

pub fn execute_validate(cli: &Cli) -> Result<RunOutcome, RunnerError> {
    let config = resolve_runner_config(cli)?;
    let root = config
        .root
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));
    tracing::info!(root = %root.display(), jobs = config.jobs, "validating workflow sets");

    let store = FsDocumentStore::new().with_excluded_dirs(config.exclude_dirs.iter().cloned());
    let runner = ValidationRunner::new(store, JsonSchemaValidator).with_options(RunOptions {
        jobs: config.jobs,
        locate: LocateOptions {
            exclude_files: config.exclude_files.clone(),
        },
    });
    let report = runner.run(root.as_path())?;

    let output = match config.format {
        OutputFormat::Text => render_report_text(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&render_report_json(&report))?,
    };
    Ok(RunOutcome {
        output,
        passed: report.passed(),
    })
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
