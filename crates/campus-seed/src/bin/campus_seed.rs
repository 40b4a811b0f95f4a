//! Seed data generator CLI.
//!
//! This binary delegates to `campus_seed::cli` for planning, generation and
//! output, keeping the behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use campus_seed::cli::{Cli, run};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            if let Err(err) = writeln!(io::stderr().lock(), "{}", report.seed_message()) {
                drop(err);
            }
            write_line(&report.success_message());
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn write_line(message: &str) {
    if let Err(err) = writeln!(io::stdout().lock(), "{message}") {
        drop(err);
    }
}
