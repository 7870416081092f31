//! Transactional insert strategies
//!
//! Both variants wrap the whole load in a single explicit transaction and
//! commit once at the end, which removes the per-row commit cost that
//! dominates the non-transactional strategies. `TxInsert` still executes an
//! ad-hoc statement per record; `TxPreparedInsert` additionally compiles
//! the statement once and reuses it.
//!
//! If any insert fails the transaction is never committed; dropping it
//! rolls back implicitly.

use crate::db;
use crate::strategy::{run_with_batch, InsertStrategy};
use crate::types::{BenchError, Record};
use rusqlite::{params, Connection};
use std::path::Path;

/// Per-record ad-hoc insert inside one transaction
#[derive(Debug, Clone, Copy)]
pub struct TxInsert;

impl InsertStrategy for TxInsert {
    fn name(&self) -> &'static str {
        "tx insert"
    }

    fn execute(&self, data_path: &Path) -> Result<(), BenchError> {
        run_with_batch(data_path, insert)
    }
}

/// Statement compiled once inside a transaction, reused per record
#[derive(Debug, Clone, Copy)]
pub struct TxPreparedInsert;

impl InsertStrategy for TxPreparedInsert {
    fn name(&self) -> &'static str {
        "tx prepare insert"
    }

    fn execute(&self, data_path: &Path) -> Result<(), BenchError> {
        run_with_batch(data_path, insert_prepared)
    }
}

/// Insert every record ad-hoc inside a single committed transaction
pub fn insert(conn: &mut Connection, records: &[Record]) -> Result<(), BenchError> {
    let tx = conn.transaction()?;
    for record in records {
        tx.execute(
            db::INSERT_SQL,
            params![record.id, record.f1, record.f2, record.f3],
        )?;
    }
    tx.commit()?;
    Ok(())
}

/// Insert every record through one prepared statement inside a transaction
pub fn insert_prepared(conn: &mut Connection, records: &[Record]) -> Result<(), BenchError> {
    let tx = conn.transaction()?;
    {
        let mut stmt = tx.prepare(db::INSERT_SQL)?;
        for record in records {
            stmt.execute(params![record.id, record.f1, record.f2, record.f3])?;
        }
    }
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::tests_support::{fetch_all, make_records};
    use rstest::rstest;

    #[rstest]
    #[case::empty(0)]
    #[case::single(1)]
    #[case::small_batch(25)]
    fn test_tx_insert_row_count_matches(#[case] count: usize) {
        let mut conn = db::open_bench_db().unwrap();
        let records = make_records(count);

        insert(&mut conn, &records).unwrap();

        assert_eq!(db::row_count(&conn, db::TABLE_NAME).unwrap(), count);
    }

    #[rstest]
    #[case::empty(0)]
    #[case::single(1)]
    #[case::small_batch(25)]
    fn test_tx_prepared_insert_row_count_matches(#[case] count: usize) {
        let mut conn = db::open_bench_db().unwrap();
        let records = make_records(count);

        insert_prepared(&mut conn, &records).unwrap();

        assert_eq!(db::row_count(&conn, db::TABLE_NAME).unwrap(), count);
    }

    #[test]
    fn test_tx_prepared_content_round_trips() {
        let mut conn = db::open_bench_db().unwrap();
        let records = make_records(12);

        insert_prepared(&mut conn, &records).unwrap();

        assert_eq!(fetch_all(&conn), records);
    }

    #[test]
    fn test_failed_batch_leaves_table_empty() {
        // A duplicate id fails mid-batch; the uncommitted transaction must
        // roll back the rows inserted before the failure.
        let mut conn = db::open_bench_db().unwrap();
        let mut records = make_records(5);
        records[4].id = records[0].id;

        let result = insert(&mut conn, &records);

        assert!(result.is_err());
        assert_eq!(db::row_count(&conn, db::TABLE_NAME).unwrap(), 0);
    }

    #[test]
    fn test_rerun_against_fresh_table_is_idempotent() {
        let records = make_records(7);

        for _ in 0..2 {
            let mut conn = db::open_bench_db().unwrap();
            insert_prepared(&mut conn, &records).unwrap();
            assert_eq!(db::row_count(&conn, db::TABLE_NAME).unwrap(), 7);
        }
    }
}
