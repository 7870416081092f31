//! Naive insert strategy
//!
//! One ad-hoc statement execution per record: no transaction, no statement
//! reuse. SQLite compiles the INSERT afresh for every row and commits each
//! row in its own implicit transaction, which is what makes this the
//! baseline worst case.

use crate::db;
use crate::strategy::{run_with_batch, InsertStrategy};
use crate::types::{BenchError, Record};
use rusqlite::{params, Connection};
use std::path::Path;

/// Per-record ad-hoc insert, no transaction
#[derive(Debug, Clone, Copy)]
pub struct NaiveInsert;

impl InsertStrategy for NaiveInsert {
    fn name(&self) -> &'static str {
        "naive insert"
    }

    fn execute(&self, data_path: &Path) -> Result<(), BenchError> {
        run_with_batch(data_path, |conn, records| insert(conn, records))
    }
}

/// Insert every record with a fresh statement execution per row
pub fn insert(conn: &Connection, records: &[Record]) -> Result<(), BenchError> {
    for record in records {
        conn.execute(
            db::INSERT_SQL,
            params![record.id, record.f1, record.f2, record.f3],
        )?;
    }
    Ok(())
}
