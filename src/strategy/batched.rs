//! Bulk-batched insert strategy
//!
//! Builds a single multi-row INSERT covering [`CHUNK_ROWS`] rows, prepares
//! it once, and re-executes it for each full chunk of the batch. Whatever
//! is left over after the full chunks is flushed with one dynamically sized
//! statement. The whole load runs inside one transaction.
//!
//! 249 rows of 4 columns is 996 bound parameters, staying under SQLite's
//! default host-parameter ceiling of 999.

use crate::db;
use crate::strategy::{run_with_batch, InsertStrategy};
use crate::types::{BenchError, Record};
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection};
use std::path::Path;

/// Rows combined into one multi-row INSERT statement
pub const CHUNK_ROWS: usize = 249;

/// Multi-row INSERT inside one transaction
#[derive(Debug, Clone, Copy)]
pub struct BulkInsert;

impl InsertStrategy for BulkInsert {
    fn name(&self) -> &'static str {
        "bulk insert"
    }

    fn execute(&self, data_path: &Path) -> Result<(), BenchError> {
        run_with_batch(data_path, insert)
    }
}

/// Insert the batch in multi-row chunks inside a single transaction
pub fn insert(conn: &mut Connection, records: &[Record]) -> Result<(), BenchError> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(&multi_row_insert_sql(CHUNK_ROWS))?;

        let mut chunks = records.chunks_exact(CHUNK_ROWS);
        for chunk in &mut chunks {
            stmt.execute(params_from_iter(bind_values(chunk)))?;
        }

        let remainder = chunks.remainder();
        if !remainder.is_empty() {
            tx.execute(
                &multi_row_insert_sql(remainder.len()),
                params_from_iter(bind_values(remainder)),
            )?;
        }
    }
    tx.commit()?;
    Ok(())
}

/// INSERT statement with `rows` placeholder groups
fn multi_row_insert_sql(rows: usize) -> String {
    let mut sql = format!("INSERT INTO {} (id, f1, f2, f3) VALUES ", db::TABLE_NAME);
    for i in 0..rows {
        if i > 0 {
            sql.push(',');
        }
        sql.push_str("(?,?,?,?)");
    }
    sql
}

/// Flatten records into one parameter list, four values per row
fn bind_values(records: &[Record]) -> impl Iterator<Item = Value> + '_ {
    records.iter().flat_map(|record| {
        [
            Value::Integer(record.id),
            Value::Text(record.f1.clone()),
            Value::Integer(record.f2),
            Value::Real(record.f3),
        ]
    })
}
