//! Deterministic synthetic seed data for a university-management database.
//!
//! The crate fabricates a director account, students, lecturers,
//! non-teaching staff and expenses from fixed reference catalogs, and writes
//! them as one JSON array for the database importer. Each record is tagged
//! with its model name:
//!
//! ```json
//! [
//!   { "model": "User", "data": { "email": "...", "role": "DIRECTOR", ... } },
//!   { "model": "Student", "data": { "studentNo": "S001", ... } }
//! ]
//! ```
//!
//! # Overview
//!
//! - [`SeedPlan`] holds the record counts and RNG seed; the default plan
//!   yields 1 user, 1000 students, 600 staff and 300 expenses.
//! - [`generate_seed_records`] samples records from an injected RNG, so a
//!   fixed seed always reproduces the same output.
//! - [`write_records`] encodes to any [`std::io::Write`] sink and
//!   [`write_records_to_file`] replaces the output file atomically.
//!
//! # Example
//!
//! ```
//! use campus_seed::{RecordSummary, SeedPlan, generate_seed_records, write_records};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let plan = SeedPlan {
//!     students: 2,
//!     lecturers: 1,
//!     support_staff: 1,
//!     expenses: 1,
//!     ..SeedPlan::default()
//! };
//! let mut rng = ChaCha8Rng::seed_from_u64(2025);
//! let records = generate_seed_records(&plan, &mut rng).expect("generation succeeds");
//!
//! let mut json = Vec::new();
//! write_records(&records, &mut json).expect("encoding succeeds");
//!
//! assert_eq!(RecordSummary::from_records(&records).total(), 6);
//! ```

mod atomic_io;
pub mod catalog;
pub mod cli;
mod error;
mod generator;
mod output;
mod plan;
mod record;
mod summary;

pub use error::{GenerationError, OutputError, PlanError};
pub use generator::{
    EXPENSE_AMOUNT, GeneratedRun, LECTURER_BIRTH_YEARS, LECTURER_SALARY, START_YEARS,
    SUPPORT_BIRTH_YEARS, SUPPORT_SALARY, YearWindow, fee_structures, generate_seed_records,
    generate_seed_records_seeded, student_number,
};
pub use output::{DEFAULT_OUTPUT_FILE, records_to_json, write_records, write_records_to_file};
pub use plan::{DEFAULT_REFERENCE_YEAR, SeedPlan};
pub use record::{
    ExpenseSeed, ExpenseStatus, FeeStructureSeed, FeeType, SeedRecord, Semester, StaffRole,
    StaffSeed, StaffStatus, StudentSeed, StudentStatus, UserRole, UserSeed,
};
pub use summary::RecordSummary;
