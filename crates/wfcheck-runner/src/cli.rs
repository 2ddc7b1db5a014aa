use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_ROOT: &str = "workflows";

#[derive(Debug, Clone, Parser)]
#[command(name = "wfcheck")]
#[command(about = "Validate workflow, schema and payload document sets")]
pub struct Cli {
    /// Directory searched recursively for workflow sets [default: workflows]
    pub root: Option<PathBuf>,
    /// Runner config file (YAML or JSON).
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Number of sets validated in parallel.
    #[arg(long)]
    pub jobs: Option<usize>,
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
    /// Enable verbose diagnostics. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
