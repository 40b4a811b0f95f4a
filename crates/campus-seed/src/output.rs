//! JSON encoding and file output.
//!
//! Records are encoded as one pretty-printed JSON array with two-space
//! indentation. File output replaces the target atomically.

use std::io::Write;

use camino::Utf8Path;
use cap_std::fs::Dir;
use tracing::info;

use crate::atomic_io::replace_file;
use crate::error::OutputError;
use crate::record::SeedRecord;

/// File name written when no output path is configured.
pub const DEFAULT_OUTPUT_FILE: &str = "seed_data.json";

/// Encodes records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns [`OutputError::SerializeError`] if encoding fails.
pub fn records_to_json(records: &[SeedRecord]) -> Result<String, OutputError> {
    serde_json::to_string_pretty(records).map_err(|err| OutputError::SerializeError {
        message: err.to_string(),
    })
}

/// Writes records as a pretty-printed JSON array to any sink.
///
/// # Errors
///
/// Returns [`OutputError::SinkError`] if the sink rejects a write or flush,
/// and [`OutputError::SerializeError`] if encoding fails.
///
/// # Example
///
/// ```
/// use campus_seed::{SeedRecord, UserRole, UserSeed, write_records};
///
/// let records = vec![SeedRecord::User(UserSeed {
///     email: "director@example.ac.ug".to_owned(),
///     password: "secret".to_owned(),
///     role: UserRole::Director,
///     is_active: true,
/// })];
/// let mut sink = Vec::new();
/// write_records(&records, &mut sink).expect("write");
///
/// let text = String::from_utf8(sink).expect("utf-8");
/// assert!(text.starts_with("[\n  {\n    \"model\": \"User\""));
/// ```
pub fn write_records<W>(records: &[SeedRecord], mut sink: W) -> Result<(), OutputError>
where
    W: Write,
{
    serde_json::to_writer_pretty(&mut sink, records).map_err(|err| {
        if err.is_io() {
            OutputError::SinkError {
                message: err.to_string(),
            }
        } else {
            OutputError::SerializeError {
                message: err.to_string(),
            }
        }
    })?;
    sink.flush().map_err(|err| OutputError::SinkError {
        message: err.to_string(),
    })
}

/// Writes records to `path` inside `dir`, replacing any existing file.
///
/// # Errors
///
/// Returns [`OutputError`] if the path does not name a file in `dir`, the
/// records cannot be encoded, or the file cannot be written.
pub fn write_records_to_file(
    dir: &Dir,
    path: &Utf8Path,
    records: &[SeedRecord],
) -> Result<(), OutputError> {
    let contents = records_to_json(records)?;
    replace_file(dir, path, &contents)?;
    info!(path = %path, records = records.len(), "wrote seed data");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use rstest::rstest;

    use super::*;
    use crate::record::{ExpenseSeed, ExpenseStatus};

    fn expense() -> SeedRecord {
        SeedRecord::Expense(ExpenseSeed {
            category: "Travel".to_owned(),
            description: "Travel expense for registry - May 2025".to_owned(),
            amount: 120_000,
            status: ExpenseStatus::Paid,
        })
    }

    #[test]
    fn writes_two_space_indented_array() {
        let mut sink = Vec::new();
        write_records(&[expense()], &mut sink).expect("write");

        let text = String::from_utf8(sink).expect("utf-8");
        let expected = concat!(
            "[\n",
            "  {\n",
            "    \"model\": \"Expense\",\n",
            "    \"data\": {\n",
            "      \"category\": \"Travel\",\n",
            "      \"description\": \"Travel expense for registry - May 2025\",\n",
            "      \"amount\": 120000,\n",
            "      \"status\": \"PAID\"\n",
            "    }\n",
            "  }\n",
            "]"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn sink_and_string_encodings_agree() {
        let records = vec![expense(), expense()];
        let mut sink = Vec::new();
        write_records(&records, &mut sink).expect("write");

        assert_eq!(sink, records_to_json(&records).expect("encode").into_bytes());
    }

    #[test]
    fn empty_record_list_is_an_empty_array() {
        assert_eq!(records_to_json(&[]).expect("encode"), "[]");
    }

    struct ClosedSink {
        fail_on_flush: bool,
    }

    impl Write for ClosedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail_on_flush {
                Ok(buf.len())
            } else {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
        }
    }

    #[rstest]
    #[case::on_write(false)]
    #[case::on_flush(true)]
    fn failing_sink_is_reported_as_sink_error(#[case] fail_on_flush: bool) {
        let result = write_records(&[expense()], ClosedSink { fail_on_flush });

        let Err(OutputError::SinkError { message }) = result else {
            panic!("expected a sink error, got {result:?}");
        };
        assert!(message.contains("sink closed"), "{message}");
    }
}
