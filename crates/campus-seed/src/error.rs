//! Error types for the campus-seed crate.
//!
//! Each concern gets its own semantic enum: loading a seed plan, generating
//! records, and writing the output file. Messages are owned strings so the
//! enums stay `Clone` and comparable in tests.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when loading a seed plan.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The plan file could not be read.
    #[error("failed to read plan file at '{path}': {message}")]
    IoError {
        /// Path to the plan file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The plan JSON is malformed or has fields of the wrong type.
    #[error("invalid plan JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The plan version is not supported.
    #[error("unsupported plan version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the plan.
        actual: u32,
    },
}

/// Errors that can occur while generating records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// A catalog that must be sampled from is empty.
    #[error("catalog '{catalog}' is empty")]
    EmptyCatalog {
        /// Name of the empty catalog.
        catalog: &'static str,
    },

    /// A calendar window does not describe valid dates.
    #[error("invalid date window {first_year}..={last_year}")]
    InvalidDateWindow {
        /// First calendar year of the window.
        first_year: i32,
        /// Last calendar year of the window.
        last_year: i32,
    },

    /// The plan asks for more records than can be held in memory.
    #[error("cannot hold {requested} records: {message}")]
    CapacityExceeded {
        /// Number of records the plan asked for.
        requested: usize,
        /// Description of the allocation failure.
        message: String,
    },
}

/// Errors that can occur while writing generated records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutputError {
    /// The records could not be encoded as JSON.
    #[error("failed to encode records as JSON: {message}")]
    SerializeError {
        /// Description of the encoding error.
        message: String,
    },

    /// The sink rejected the encoded records.
    #[error("failed to write records to output: {message}")]
    SinkError {
        /// Description of the I/O error.
        message: String,
    },

    /// The output file could not be written.
    #[error("failed to write output file at '{path}': {message}")]
    WriteError {
        /// Path being written.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The output path does not name a file.
    #[error("output path '{path}' must name a file")]
    InvalidPath {
        /// Rejected path.
        path: Utf8PathBuf,
    },
}
