//! Command-line surface for the seed generator.
//!
//! The binary only parses arguments and prints; everything else lives here so
//! it can be exercised in tests without spawning a process.

use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use thiserror::Error;

use crate::error::{GenerationError, OutputError, PlanError};
use crate::generator::generate_seed_records_seeded;
use crate::output::{DEFAULT_OUTPUT_FILE, write_records_to_file};
use crate::plan::SeedPlan;
use crate::summary::RecordSummary;

/// Generate synthetic seed data for the university-management database.
#[derive(Debug, Clone, Parser)]
#[command(name = "campus-seed", version, about)]
pub struct Cli {
    /// Output file, created or replaced.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: Utf8PathBuf,

    /// JSON seed plan to start from instead of the built-in defaults.
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// RNG seed; identical seeds produce identical output. Without it a
    /// random seed is drawn and printed to stderr.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of students to generate.
    #[arg(long)]
    pub students: Option<usize>,

    /// Number of lecturers to generate.
    #[arg(long)]
    pub lecturers: Option<usize>,

    /// Number of non-teaching staff to generate.
    #[arg(long)]
    pub support_staff: Option<usize>,

    /// Number of expenses to generate.
    #[arg(long)]
    pub expenses: Option<usize>,

    /// Append the standard fee structures after the expenses.
    #[arg(long)]
    pub with_fees: bool,
}

impl Cli {
    /// Resolves the seed plan: the plan file (or defaults) with any flags
    /// applied on top.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Plan`] if the plan file cannot be loaded.
    ///
    /// # Example
    ///
    /// ```
    /// use campus_seed::cli::Cli;
    /// use clap::Parser;
    ///
    /// let cli = Cli::try_parse_from(["campus-seed", "--students", "5", "--seed", "9"])
    ///     .expect("parse");
    /// let plan = cli.resolve_plan().expect("plan");
    ///
    /// assert_eq!(plan.students, 5);
    /// assert_eq!(plan.seed, Some(9));
    /// ```
    pub fn resolve_plan(&self) -> Result<SeedPlan, CliError> {
        let base = match &self.plan {
            Some(path) => SeedPlan::from_file(path)?,
            None => SeedPlan::default(),
        };

        Ok(SeedPlan {
            students: self.students.unwrap_or(base.students),
            lecturers: self.lecturers.unwrap_or(base.lecturers),
            support_staff: self.support_staff.unwrap_or(base.support_staff),
            expenses: self.expenses.unwrap_or(base.expenses),
            seed: self.seed.or(base.seed),
            include_fees: self.with_fees || base.include_fees,
            ..base
        })
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Seed the records were generated from.
    pub seed: u64,
    /// Where the records were written.
    pub output: Utf8PathBuf,
    /// Record counts by kind.
    pub summary: RecordSummary,
}

impl RunReport {
    /// Formats the line printed on success.
    #[must_use]
    pub fn success_message(&self) -> String {
        self.summary.summary_line(self.output.as_str())
    }

    /// Formats the line naming the seed, so an unseeded run can be replayed.
    ///
    /// ```
    /// use campus_seed::RecordSummary;
    /// use campus_seed::cli::RunReport;
    ///
    /// let report = RunReport {
    ///     seed: 2025,
    ///     output: "seed_data.json".into(),
    ///     summary: RecordSummary::default(),
    /// };
    ///
    /// assert_eq!(report.seed_message(), "Seed 2025; pass --seed 2025 to reproduce.");
    /// ```
    #[must_use]
    pub fn seed_message(&self) -> String {
        format!("Seed {0}; pass --seed {0} to reproduce.", self.seed)
    }
}

/// Resolves the plan, generates the records and writes the output file.
///
/// # Errors
///
/// Returns [`CliError`] if the plan cannot be loaded, generation fails, or
/// the output cannot be written.
pub fn run(cli: &Cli) -> Result<RunReport, CliError> {
    let plan = cli.resolve_plan()?;
    let generated = generate_seed_records_seeded(&plan)?;

    let (parent, file_name) = split_output_path(&cli.output)?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        CliError::OutputDirectory {
            path: parent.to_path_buf(),
            message: err.to_string(),
        }
    })?;
    write_records_to_file(&dir, file_name, &generated.records)?;

    Ok(RunReport {
        seed: generated.seed,
        output: cli.output.clone(),
        summary: RecordSummary::from_records(&generated.records),
    })
}

fn split_output_path(path: &Utf8Path) -> Result<(&Utf8Path, &Utf8Path), OutputError> {
    let file_name = path.file_name().ok_or_else(|| OutputError::InvalidPath {
        path: path.to_path_buf(),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    Ok((parent, Utf8Path::new(file_name)))
}

/// Errors surfaced by a command-line run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The seed plan could not be loaded.
    #[error("plan error: {0}")]
    Plan(#[from] PlanError),
    /// Record generation failed.
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    /// The output could not be written.
    #[error("output error: {0}")]
    Output(#[from] OutputError),
    /// The directory holding the output file could not be opened.
    #[error("failed to open output directory '{path}': {message}")]
    OutputDirectory {
        /// Directory that could not be opened.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}
