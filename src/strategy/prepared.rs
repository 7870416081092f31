//! Prepared-statement insert strategy
//!
//! The INSERT is compiled once and the compiled statement is re-executed
//! with fresh bindings for every record. Still no transaction, so each row
//! pays its own commit; the saving over the naive strategy is purely the
//! statement compilation.

use crate::db;
use crate::strategy::{run_with_batch, InsertStrategy};
use crate::types::{BenchError, Record};
use rusqlite::{params, Connection};
use std::path::Path;

/// Statement compiled once, reused per record, no transaction
#[derive(Debug, Clone, Copy)]
pub struct PreparedInsert;

impl InsertStrategy for PreparedInsert {
    fn name(&self) -> &'static str {
        "prepare insert"
    }

    fn execute(&self, data_path: &Path) -> Result<(), BenchError> {
        run_with_batch(data_path, |conn, records| insert(conn, records))
    }
}

/// Insert every record through one prepared statement
pub fn insert(conn: &Connection, records: &[Record]) -> Result<(), BenchError> {
    let mut stmt = conn.prepare(db::INSERT_SQL)?;
    for record in records {
        stmt.execute(params![record.id, record.f1, record.f2, record.f3])?;
    }
    Ok(())
}
