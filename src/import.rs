//! Native bulk import via the `sqlite3` CLI
//!
//! Bypasses the programmatic insert path entirely: the harness spawns the
//! database's own command-line shell and drives it over a stdin pipe. The
//! child's stdout is inherited, so whatever the CLI reports (including the
//! row count it is asked for) prints directly to the harness's stdout.
//!
//! Directives are written in this exact order: schema DDL, separator
//! directive, import directive, row-count query, quit directive.

use crate::db;
use crate::strategy::InsertStrategy;
use crate::types::BenchError;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

/// Name of the SQLite shell binary
const SQLITE_CLI: &str = "sqlite3";

/// The `.import`-based load path
#[derive(Debug, Clone, Copy)]
pub struct NativeImport;

impl InsertStrategy for NativeImport {
    fn name(&self) -> &'static str {
        ".import csv"
    }

    fn execute(&self, data_path: &Path) -> Result<(), BenchError> {
        import_csv(data_path)
    }
}

/// Import the data file through the `sqlite3` shell
///
/// # Errors
///
/// Returns an error if the shell cannot be spawned, a pipe write fails, or
/// the shell exits with a non-zero status. Import problems the shell itself
/// tolerates are only visible in its stdout.
pub fn import_csv(data_path: &Path) -> Result<(), BenchError> {
    let mut child = Command::new(SQLITE_CLI)
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|e| BenchError::import(format!("failed to start {SQLITE_CLI}: {e}")))?;

    let mut stdin = child
        .stdin
        .take()
        .ok_or_else(|| BenchError::import("child stdin unavailable"))?;
    stdin.write_all(db::CREATE_TABLE_SQL.as_bytes())?;
    stdin.write_all(b".separator ,\n")?;
    writeln!(stdin, ".import {} {}", data_path.display(), db::TABLE_NAME)?;
    writeln!(stdin, "SELECT count(*) FROM {};", db::TABLE_NAME)?;
    stdin.write_all(b".quit\n")?;
    // Close the pipe so the shell sees EOF even if .quit is ignored.
    drop(stdin);

    let status = child
        .wait()
        .map_err(|e| BenchError::import(format!("failed to wait for {SQLITE_CLI}: {e}")))?;
    if !status.success() {
        return Err(BenchError::import(format!(
            "{SQLITE_CLI} exited with {status}"
        )));
    }
    Ok(())
}
