//! CSV record loader
//!
//! Reads the whole data file into memory as an ordered `Vec<Record>` before
//! any insert strategy runs. There is deliberately no streaming: every
//! strategy works from the same fully materialized batch, so load cost is
//! part of each strategy's measured time exactly once.
//!
//! # Error Handling
//!
//! A missing file or a malformed line (wrong field count, unparseable
//! field) fails the whole load; the error propagates to the caller with no
//! partial result.

use crate::types::{BenchError, Record};
use csv::ReaderBuilder;
use std::path::Path;

/// Load every record from the data file, preserving file order
///
/// The reader is strict: no header row is expected and every line must
/// have exactly four fields.
pub fn load(path: &Path) -> Result<Vec<Record>, BenchError> {
    let mut reader = ReaderBuilder::new().has_headers(false).from_path(path)?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        records.push(result?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper to write raw CSV content to a temp file
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_load_preserves_file_order() {
        let file = create_temp_csv("2,c,30,0.3\n0,a,10,0.1\n1,b,20,0.2\n");

        let records = load(file.path()).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0], Record::new(2, "c", 30, 0.3));
        assert_eq!(records[1], Record::new(0, "a", 10, 0.1));
        assert_eq!(records[2], Record::new(1, "b", 20, 0.2));
    }

    #[test]
    fn test_load_empty_file_yields_empty_batch() {
        let file = create_temp_csv("");
        let records = load(file.path()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_fails_on_missing_file() {
        let result = load(Path::new("nonexistent.csv"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_fails_on_short_line() {
        let file = create_temp_csv("0,a,10,0.1\n1,b,20\n");
        let result = load(file.path());
        assert!(matches!(result, Err(BenchError::Csv(_))));
    }

    #[test]
    fn test_load_fails_on_long_line() {
        let file = create_temp_csv("0,a,10,0.1\n1,b,20,0.2,extra\n");
        let result = load(file.path());
        assert!(matches!(result, Err(BenchError::Csv(_))));
    }

    #[test]
    fn test_load_fails_on_non_numeric_id() {
        let file = create_temp_csv("zero,a,10,0.1\n");
        let result = load(file.path());
        assert!(matches!(result, Err(BenchError::Csv(_))));
    }

    #[test]
    fn test_load_parses_scientific_notation_floats() {
        let file = create_temp_csv("0,a,10,6.2774385622041925e-01\n");
        let records = load(file.path()).unwrap();
        assert_eq!(records[0].f3, 6.277_438_562_204_192_5e-1);
    }
}
