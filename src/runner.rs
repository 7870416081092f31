//! Benchmark runner
//!
//! Times each strategy with `Instant` and prints one `<name>: <elapsed>`
//! line per strategy. Strategies run sequentially; the first failure stops
//! the suite.

use crate::strategy::{all_strategies, InsertStrategy};
use crate::types::BenchError;
use std::path::Path;
use std::time::Instant;

/// Run the full suite against the data file, in benchmark order
pub fn run_suite(data_path: &Path) -> Result<(), BenchError> {
    for strategy in all_strategies() {
        run_timed(strategy.as_ref(), data_path)?;
    }
    Ok(())
}

/// Run one strategy and print its elapsed time
pub fn run_timed(strategy: &dyn InsertStrategy, data_path: &Path) -> Result<(), BenchError> {
    let start = Instant::now();
    strategy.execute(data_path)?;
    println!("{}: {:?}", strategy.name(), start.elapsed());
    Ok(())
}
