//! SQLite Load Bench Library
//!
//! # Overview
//!
//! A micro-benchmark harness comparing ways to bulk-load CSV records into a
//! SQLite table: single-row inserts, prepared statements, transactions,
//! multi-row batched statements, and the `sqlite3` shell's native `.import`.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (`Record`, `BenchError`)
//! - [`cli`] - CLI argument parsing
//! - [`io`] - Synthetic data generation and CSV loading
//! - [`db`] - Shared schema DDL and connection helpers
//! - [`strategy`] - The programmatic insert strategies behind one trait
//! - [`import`] - The native `.import` path via a `sqlite3` subprocess
//! - [`runner`] - Sequential timing and reporting of the suite
//!
//! # Strategies
//!
//! In suite order: native import, naive per-row inserts, prepared-statement
//! inserts, transactional inserts, transactional prepared inserts, and
//! multi-row batched inserts (249 rows per statement). Each strategy opens
//! its own fresh in-memory database and loads the data file itself, so the
//! measured times are directly comparable.

// Module declarations
pub mod cli;
pub mod db;
pub mod import;
pub mod io;
pub mod runner;
pub mod strategy;
pub mod types;

pub use import::import_csv;
pub use io::{generate, load};
pub use runner::{run_suite, run_timed};
pub use strategy::{all_strategies, create_strategy, InsertStrategy};
pub use types::{BenchError, Record, RecordId};
