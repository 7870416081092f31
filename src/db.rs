//! Shared SQL and connection helpers
//!
//! Every insert strategy runs against its own fresh in-memory SQLite
//! database with one fixed four-column table. The schema, the single-row
//! insert statement, and the row-count query live here so the strategies,
//! the native importer, and the tests all agree on them.

use crate::types::BenchError;
use rusqlite::Connection;

/// Name of the benchmark table
pub const TABLE_NAME: &str = "test";

/// Schema DDL for the benchmark table
///
/// Also piped verbatim into the `sqlite3` CLI by the native importer.
pub const CREATE_TABLE_SQL: &str = "CREATE TABLE test (
    id INTEGER,
    f1 TEXT,
    f2 INTEGER,
    f3 REAL,
    PRIMARY KEY (id)
);
";

/// Single-row insert used by every per-record strategy
pub const INSERT_SQL: &str = "INSERT INTO test (id, f1, f2, f3) VALUES (?, ?, ?, ?)";

/// Open a fresh in-memory database with the benchmark table created
///
/// Each strategy run gets its own independent instance; nothing is shared
/// across runs.
pub fn open_bench_db() -> Result<Connection, BenchError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(CREATE_TABLE_SQL)?;
    Ok(conn)
}

/// Create the benchmark schema under an arbitrary table name
///
/// Used by the multi-table demo, which puts two identically shaped tables
/// in one database.
pub fn create_table(conn: &Connection, name: &str) -> Result<(), BenchError> {
    conn.execute_batch(&format!(
        "CREATE TABLE {name} (
    id INTEGER,
    f1 TEXT,
    f2 INTEGER,
    f3 REAL,
    PRIMARY KEY (id)
);
"
    ))?;
    Ok(())
}

/// Row count of the named table
pub fn row_count(conn: &Connection, table: &str) -> Result<usize, BenchError> {
    let count: i64 =
        conn.query_row(&format!("SELECT count(*) FROM {table}"), [], |row| {
            row.get(0)
        })?;
    Ok(count as usize)
}
