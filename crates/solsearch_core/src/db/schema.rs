//! Schema for the single `applications` table.
//!
//! Status and priority ranges are enforced by the typed write path, not by
//! table constraints, so databases created by older tools stay readable.

use super::DbResult;
use rusqlite::Connection;

pub const APPLICATIONS_TABLE: &str = "applications";

const CREATE_APPLICATIONS_SQL: &str = "
CREATE TABLE IF NOT EXISTS applications (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    company TEXT NOT NULL CHECK (length(trim(company)) > 0),
    role TEXT NOT NULL CHECK (length(trim(role)) > 0),
    date_applied TEXT NOT NULL,
    status TEXT NOT NULL,
    priority INTEGER NOT NULL
);";

/// Creates the `applications` table when absent. Safe to call repeatedly.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_APPLICATIONS_SQL)?;
    Ok(())
}

/// Returns whether the `applications` table exists on this connection.
pub fn applications_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [APPLICATIONS_TABLE],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
