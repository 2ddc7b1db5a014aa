mod cli;
mod config;
mod run;

pub use cli::{Cli, OutputFormat, DEFAULT_ROOT};
pub use config::{
    load_runner_config, validate_runner_config, RunnerConfig, RunnerConfigError,
    RUNNER_CONFIG_SCHEMA,
};
pub use run::{execute_validate, resolve_runner_config, RunOutcome, RunnerError};
