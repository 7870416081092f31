//! Error types for the load benchmark
//!
//! A single error taxonomy covers the whole harness: every layer returns
//! `BenchError` unchanged to its caller, and `main` terminates the process
//! with a diagnostic on the first failure. There are no retries and no
//! partial recovery.

use thiserror::Error;

/// Main error type for the benchmark harness
///
/// Wraps the failure modes of the three external collaborators (filesystem,
/// CSV parser, SQLite) plus the native import subprocess. All variants are
/// fatal to the strategy that hit them.
#[derive(Debug, Error)]
pub enum BenchError {
    /// I/O error while reading or writing the data file, or while writing
    /// to the import subprocess's stdin pipe
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization or parsing error
    ///
    /// Includes malformed lines with unequal field counts; the loader does
    /// not recover partially.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error returned by SQLite through the programmatic insert path
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Native import subprocess failed to start, exited non-zero, or could
    /// not be waited on
    #[error("import failed: {message}")]
    Import {
        /// Description of the subprocess failure
        message: String,
    },
}

impl BenchError {
    /// Create an Import error
    pub fn import(message: impl Into<String>) -> Self {
        BenchError::Import {
            message: message.into(),
        }
    }
}
