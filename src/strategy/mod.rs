//! Insert strategy module
//!
//! This module defines the Strategy pattern for the benchmark's load paths.
//! Each strategy shares one contract: open a fresh in-memory database with
//! the benchmark table created, load the full record batch from the data
//! file, and insert every record using its own execution pattern. The
//! strategies are mutually independent; they run sequentially purely so the
//! harness can time them one after another.
//!
//! The native `.import` path also implements [`InsertStrategy`] even though
//! it bypasses the programmatic insert path entirely; see [`crate::import`].

use crate::cli::StrategyType;
use crate::db;
use crate::io::loader;
use crate::types::{BenchError, Record};
use rusqlite::Connection;
use std::path::Path;

pub mod batched;
pub mod naive;
pub mod prepared;
pub mod transactional;

pub use batched::BulkInsert;
pub use naive::NaiveInsert;
pub use prepared::PreparedInsert;
pub use transactional::{TxInsert, TxPreparedInsert};

/// Insert strategy trait
///
/// `execute` covers the whole measured unit of work: opening the backing
/// store, loading the data file, and inserting every record. Any error at
/// any step aborts the strategy immediately with no partial-result
/// reporting.
pub trait InsertStrategy {
    /// Label printed next to this strategy's elapsed time
    fn name(&self) -> &'static str;

    /// Load the data file and insert every record into a fresh table
    fn execute(&self, data_path: &Path) -> Result<(), BenchError>;
}

/// Create an insert strategy for the given strategy type
///
/// Factory mapping the CLI's strategy selection onto a boxed trait object,
/// covering the native import path as well as the five programmatic ones.
pub fn create_strategy(strategy_type: StrategyType) -> Box<dyn InsertStrategy> {
    match strategy_type {
        StrategyType::Import => Box::new(crate::import::NativeImport),
        StrategyType::Naive => Box::new(NaiveInsert),
        StrategyType::Prepared => Box::new(PreparedInsert),
        StrategyType::Tx => Box::new(TxInsert),
        StrategyType::TxPrepared => Box::new(TxPreparedInsert),
        StrategyType::Bulk => Box::new(BulkInsert),
    }
}

/// The full benchmark suite in reporting order
///
/// Native import runs first, then the programmatic strategies from slowest
/// expected to fastest expected.
pub fn all_strategies() -> Vec<Box<dyn InsertStrategy>> {
    [
        StrategyType::Import,
        StrategyType::Naive,
        StrategyType::Prepared,
        StrategyType::Tx,
        StrategyType::TxPrepared,
        StrategyType::Bulk,
    ]
    .into_iter()
    .map(create_strategy)
    .collect()
}

/// Open a fresh database, load the batch, and hand both to `insert`
///
/// Shared plumbing for the programmatic strategies; the closure is the
/// strategy-specific execution pattern.
fn run_with_batch(
    data_path: &Path,
    insert: impl FnOnce(&mut Connection, &[Record]) -> Result<(), BenchError>,
) -> Result<(), BenchError> {
    let mut conn = db::open_bench_db()?;
    let records = loader::load(data_path)?;
    insert(&mut conn, &records)
}
