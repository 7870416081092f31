//! SQLite Load Bench CLI
//!
//! Micro-benchmark comparing CSV bulk-load strategies against SQLite.
//!
//! # Usage
//!
//! ```bash
//! cargo run --release -- gen            # generate testdata.csv, then benchmark
//! cargo run --release                   # benchmark an existing testdata.csv
//! cargo run --release -- gen --rows 100000
//! cargo run --release -- --strategy bulk
//! ```
//!
//! With no `--strategy`, the whole suite runs sequentially and prints one
//! elapsed-time line per strategy.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (data file missing, SQLite error, sqlite3 CLI failure, etc.)

use sqlite_load_bench::cli;
use sqlite_load_bench::io::generator;
use sqlite_load_bench::runner;
use sqlite_load_bench::strategy;
use std::process;

fn main() {
    let args = cli::parse_args();

    // Optional data generation before benchmarking
    if matches!(args.mode, Some(cli::Mode::Gen)) {
        if let Err(e) = generator::generate(&args.data_file, args.rows) {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }

    let result = match args.strategy {
        Some(kind) => {
            let strategy = strategy::create_strategy(kind);
            runner::run_timed(strategy.as_ref(), &args.data_file)
        }
        None => runner::run_suite(&args.data_file),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
