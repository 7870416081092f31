//! Types module
//!
//! Contains core data structures used throughout the application:
//! - `record`: the benchmark data row
//! - `error`: the harness-wide error type

pub mod error;
pub mod record;

pub use error::BenchError;
pub use record::{Record, RecordId};
