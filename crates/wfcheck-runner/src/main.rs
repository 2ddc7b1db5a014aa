use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wfcheck_runner::{execute_validate, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match execute_validate(&cli) {
        Ok(outcome) => {
            println!("{}", outcome.output);
            if outcome.passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(error) => {
            tracing::error!(%error, "validation run aborted");
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
