//! Flat-file export of the full application table.
//!
//! # Invariants
//! - Header is always the fixed six columns in `EXPORT_HEADER` order.
//! - Output is UTF-8 CSV with `\n` line endings and no trailing blank line.

use crate::model::application::Application;
use crate::service::application_store::StoreError;
use csv::{Terminator, WriterBuilder};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// File name used when the caller does not choose one.
pub const DEFAULT_EXPORT_FILE_NAME: &str = "solsearch_export.csv";

pub const EXPORT_HEADER: [&str; 6] = ["ID", "Company", "Role", "Date Applied", "Status", "Priority"];

/// Header plus every record, in the order requested from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    pub header: [&'static str; 6],
    pub rows: Vec<Application>,
}

impl ExportTable {
    pub fn new(rows: Vec<Application>) -> Self {
        Self {
            header: EXPORT_HEADER,
            rows,
        }
    }
}

#[derive(Debug)]
pub enum ExportError {
    /// Reading records from the store failed.
    Store(StoreError),
    Csv(csv::Error),
    Io(std::io::Error),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Csv(err) => write!(f, "csv write failed: {err}"),
            Self::Io(err) => write!(f, "export file error: {err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Csv(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<StoreError> for ExportError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<csv::Error> for ExportError {
    fn from(value: csv::Error) -> Self {
        Self::Csv(value)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Writes `table` as CSV into `writer`.
pub fn write_csv<W: Write>(table: &ExportTable, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(table.header)?;
    for row in &table.rows {
        csv_writer.write_record([
            row.id.to_string(),
            row.company.clone(),
            row.role.clone(),
            row.date_applied.to_string(),
            row.status.as_str().to_string(),
            row.priority.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Writes `table` to a new file at `path`, replacing any existing file.
pub fn export_to_path(table: &ExportTable, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let result = File::create(path)
        .map_err(ExportError::from)
        .and_then(|file| write_csv(table, file));

    match &result {
        Ok(()) => info!(
            "event=csv_export module=report status=ok rows={}",
            table.rows.len()
        ),
        Err(err) => error!(
            "event=csv_export module=report status=error rows={} error={}",
            table.rows.len(),
            err
        ),
    }
    result
}
