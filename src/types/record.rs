//! Record types for the load benchmark
//!
//! A `Record` is one synthetic data row as it travels between the generator,
//! the CSV data file, and the insert strategies. The field order matches both
//! the CSV column order and the benchmark table schema.

use serde::{Deserialize, Serialize};

/// Record identifier
///
/// Sequential starting at 0 when generated synthetically; caller-supplied
/// in the multi-table demo.
pub type RecordId = i64;

/// One benchmark data row
///
/// Serialized to and from the comma-delimited data file via serde, with no
/// header row. Fields map 1:1 onto the benchmark table columns:
/// `(id INTEGER, f1 TEXT, f2 INTEGER, f3 REAL)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique row identifier, the table's primary key
    pub id: RecordId,

    /// Random lowercase-alphanumeric string (20 chars when generated)
    pub f1: String,

    /// Random non-negative integer
    pub f2: i64,

    /// Random double in `[0, 1)`
    pub f3: f64,
}

impl Record {
    /// Construct a record from its four fields
    pub fn new(id: RecordId, f1: impl Into<String>, f2: i64, f3: f64) -> Self {
        Self {
            id,
            f1: f1.into(),
            f2,
            f3,
        }
    }
}
