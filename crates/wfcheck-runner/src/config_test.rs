use super::{
    expand_env_placeholders, load_runner_config, validate_runner_config, RunnerConfig,
    RunnerConfigError,
};
use crate::cli::OutputFormat;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn load_runner_config_parses_yaml() {
    let path = write_temp_file(
        "runner-config-yaml",
        "wfcheck.yaml",
        r#"
schema: wfcheck-runner/0.0.1
root: definitions
jobs: 4
exclude_files:
  - tsconfig.json
exclude_dirs:
  - dist
format: json
"#,
    );

    let config = load_runner_config(path.as_path()).expect("config must load");
    assert_eq!(config.root.as_deref(), Some(Path::new("definitions")));
    assert_eq!(config.jobs, 4);
    assert_eq!(config.exclude_files, vec!["tsconfig.json".to_string()]);
    assert_eq!(config.exclude_dirs, vec!["dist".to_string()]);
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn load_runner_config_parses_json_with_defaults() {
    let path = write_temp_file("runner-config-json", "wfcheck.json", r#"{"jobs": 2}"#);

    let config = load_runner_config(path.as_path()).expect("config must load");
    assert_eq!(
        config,
        RunnerConfig {
            jobs: 2,
            ..RunnerConfig::default()
        }
    );
}

#[test]
fn load_runner_config_rejects_unknown_fields() {
    let path = write_temp_file("runner-config-unknown", "wfcheck.yaml", "threads: 4\n");

    let err = load_runner_config(path.as_path()).expect_err("unknown field must fail");
    match err {
        RunnerConfigError::Parse(message) => assert!(message.contains("threads")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn load_runner_config_reports_validation_issues_with_file() {
    let path = write_temp_file(
        "runner-config-invalid",
        "wfcheck.yaml",
        "schema: other/1\njobs: 0\nexclude_files: [\"\", \"nested/file.json\"]\n",
    );

    let err = load_runner_config(path.as_path()).expect_err("invalid config must fail");
    let RunnerConfigError::Validation(issues) = err else {
        panic!("expected validation error");
    };
    let references = issues
        .iter()
        .map(|issue| issue.reference.as_deref().unwrap_or_default())
        .collect::<Vec<_>>();
    assert_eq!(
        references,
        vec![
            "runner.config.exclude_files.non_empty",
            "runner.config.exclude_files.file_name",
            "runner.config.jobs",
            "runner.config.schema",
        ]
    );
    let file = path.display().to_string();
    assert!(issues
        .iter()
        .all(|issue| issue.file.as_deref() == Some(file.as_str())));
}

#[test]
fn load_runner_config_missing_file_is_read_error() {
    let path = temp_dir("runner-config-missing").join("absent.yaml");
    let err = load_runner_config(path.as_path()).expect_err("missing file must fail");
    assert!(matches!(err, RunnerConfigError::ReadFile { .. }));
}

#[test]
fn validate_runner_config_accepts_defaults() {
    assert!(validate_runner_config(&RunnerConfig::default()).is_empty());
}

#[test]
fn validate_runner_config_flags_blank_exclude_dirs() {
    let config = RunnerConfig {
        exclude_dirs: vec!["dist".to_string(), "  ".to_string()],
        ..RunnerConfig::default()
    };
    let issues = validate_runner_config(&config);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field_path.to_string(), "$.exclude_dirs[1]");
}

#[test]
fn env_placeholders_expand_and_report_missing_vars() {
    std::env::set_var("WFCHECK_CONFIG_TEST_ROOT", "from-env");
    let expanded =
        expand_env_placeholders("root: ${WFCHECK_CONFIG_TEST_ROOT}/defs").expect("must expand");
    assert_eq!(expanded, "root: from-env/defs");

    let err = expand_env_placeholders("root: ${WFCHECK_CONFIG_TEST_UNSET_VAR}")
        .expect_err("unset var must fail");
    assert!(err.contains("WFCHECK_CONFIG_TEST_UNSET_VAR"));
    assert!(expand_env_placeholders("root: ${").is_err());
}

fn temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock must be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("wfcheck-{prefix}-{nanos}"));
    fs::create_dir_all(&dir).expect("must create temp dir");
    dir
}

fn write_temp_file(prefix: &str, name: &str, content: &str) -> PathBuf {
    let path = temp_dir(prefix).join(name);
    fs::write(&path, content).expect("must write temp file");
    path
}
