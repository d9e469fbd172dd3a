//! Connection bootstrap for file and shared in-memory databases.
//!
//! # Invariants
//! - Returned connections have `busy_timeout` applied from `StoreConfig`.
//! - Opening never creates tables; see `schema::ensure_schema`.

use super::DbResult;
use crate::config::{StoreConfig, StoreLocation};
use log::{debug, error};
use rusqlite::{Connection, OpenFlags};
use std::time::Instant;

/// Opens a fresh connection for one store operation.
///
/// # Side effects
/// - Creates the database file when it does not exist yet.
/// - Emits `db_open` debug events; failures are logged at error level.
pub fn open_connection(config: &StoreConfig) -> DbResult<Connection> {
    let started_at = Instant::now();
    let mode = config.mode();

    let result = connect(&config.location).and_then(|conn| {
        conn.busy_timeout(config.busy_timeout)?;
        Ok(conn)
    });

    match result {
        Ok(conn) => {
            debug!(
                "event=db_open module=db status=ok mode={} duration_ms={}",
                mode,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode={} duration_ms={} error_code=db_open_failed error={}",
                mode,
                started_at.elapsed().as_millis(),
                err
            );
            Err(err.into())
        }
    }
}

fn connect(location: &StoreLocation) -> rusqlite::Result<Connection> {
    match location {
        StoreLocation::File(path) => Connection::open(path),
        StoreLocation::Memory(name) => Connection::open_with_flags(
            format!("file:{name}?mode=memory&cache=shared"),
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        ),
    }
}
