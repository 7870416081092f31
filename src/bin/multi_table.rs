//! Multi-table demo
//!
//! Demonstrates independent transactional prepared inserts: one in-memory
//! database, two identically shaped tables, one transaction, two prepared
//! statements executed interleaved. The id ranges overlap across the two
//! tables on purpose; the tables are independent and no cross-table
//! consistency is implied.
//!
//! Prints the row count of each table after commit.

use rusqlite::{params, Connection};
use sqlite_load_bench::db;
use sqlite_load_bench::types::BenchError;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), BenchError> {
    let mut conn = Connection::open_in_memory()?;
    db::create_table(&conn, "table1")?;
    db::create_table(&conn, "table2")?;

    let tx = conn.transaction()?;
    {
        let mut ins1 = tx.prepare("INSERT INTO table1 (id, f1, f2, f3) VALUES (?, ?, ?, ?)")?;
        let mut ins2 = tx.prepare("INSERT INTO table2 (id, f1, f2, f3) VALUES (?, ?, ?, ?)")?;

        ins1.execute(params![0, "a", 0, 0.0])?;
        ins2.execute(params![3, "d", 3, 0.3])?;
        ins1.execute(params![1, "b", 1, 0.1])?;
        ins2.execute(params![4, "e", 4, 0.4])?;
        ins1.execute(params![2, "c", 2, 0.2])?;
    }
    tx.commit()?;

    println!("{}", db::row_count(&conn, "table1")?);
    println!("{}", db::row_count(&conn, "table2")?);
    Ok(())
}
