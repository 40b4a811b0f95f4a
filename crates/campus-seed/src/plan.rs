//! Seed plan types and JSON parsing.
//!
//! A seed plan says how many records of each kind to generate and which RNG
//! seed to use. The default plan produces the standard fixture set; a JSON
//! plan file can override any subset of its fields.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::PlanError;

/// Current supported plan version.
const SUPPORTED_VERSION: u32 = 1;

/// Calendar year used in expense descriptions and fee academic years.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2025;

/// Counts and knobs that drive one generation run.
///
/// # Example
///
/// ```
/// use campus_seed::SeedPlan;
///
/// let plan = SeedPlan::from_json(r#"{"version": 1, "students": 20, "seed": 7}"#)
///     .expect("valid plan");
///
/// assert_eq!(plan.students, 20);
/// assert_eq!(plan.lecturers, 300);
/// assert_eq!(plan.seed, Some(7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedPlan {
    /// Director accounts to emit.
    pub users: usize,
    /// Students to emit.
    pub students: usize,
    /// Lecturers to emit.
    pub lecturers: usize,
    /// Non-teaching staff to emit.
    pub support_staff: usize,
    /// Expenses to emit.
    pub expenses: usize,
    /// RNG seed; a random seed is drawn when absent.
    pub seed: Option<u64>,
    /// Year stamped on expense descriptions and fee academic years.
    pub reference_year: i32,
    /// Append the standard fee structures after the expenses.
    pub include_fees: bool,
}

impl Default for SeedPlan {
    fn default() -> Self {
        Self {
            users: 1,
            students: 1000,
            lecturers: 300,
            support_staff: 300,
            expenses: 300,
            seed: None,
            reference_year: DEFAULT_REFERENCE_YEAR,
            include_fees: false,
        }
    }
}

impl SeedPlan {
    /// Parses a seed plan from a JSON string.
    ///
    /// Fields left out of the JSON keep their [`Default`] values.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] if the JSON is malformed, a field has the wrong
    /// type, or the version is unsupported.
    pub fn from_json(json: &str) -> Result<Self, PlanError> {
        let raw: RawSeedPlan = serde_json::from_str(json).map_err(|e| PlanError::ParseError {
            message: e.to_string(),
        })?;

        Self::from_raw(raw)
    }

    /// Loads a seed plan from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, PlanError> {
        let contents = fs::read_to_string(path).map_err(|e| PlanError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedPlan) -> Result<Self, PlanError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(PlanError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        let defaults = Self::default();
        Ok(Self {
            users: raw.users.unwrap_or(defaults.users),
            students: raw.students.unwrap_or(defaults.students),
            lecturers: raw.lecturers.unwrap_or(defaults.lecturers),
            support_staff: raw.support_staff.unwrap_or(defaults.support_staff),
            expenses: raw.expenses.unwrap_or(defaults.expenses),
            seed: raw.seed,
            reference_year: raw.reference_year.unwrap_or(defaults.reference_year),
            include_fees: raw.include_fees.unwrap_or(defaults.include_fees),
        })
    }

    /// Total number of staff records, teaching and non-teaching.
    #[must_use]
    pub const fn staff(&self) -> usize {
        self.lecturers.saturating_add(self.support_staff)
    }

    /// Number of records a run with this plan emits.
    #[must_use]
    pub const fn record_count(&self, fee_count: usize) -> usize {
        let fees = if self.include_fees { fee_count } else { 0 };
        self.users
            .saturating_add(self.students)
            .saturating_add(self.staff())
            .saturating_add(self.expenses)
            .saturating_add(fees)
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawSeedPlan {
    version: u32,
    users: Option<usize>,
    students: Option<usize>,
    lecturers: Option<usize>,
    support_staff: Option<usize>,
    expenses: Option<usize>,
    seed: Option<u64>,
    reference_year: Option<i32>,
    include_fees: Option<bool>,
}
