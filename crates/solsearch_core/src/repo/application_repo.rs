//! Application repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD and status-count queries over the `applications` table.
//! - Keep SQL text inside the persistence boundary.
//!
//! # Invariants
//! - Write paths reject empty `company`/`role` before SQL runs.
//! - Ordering is chosen from a closed enum; caller text never reaches SQL.
//! - Read paths reject undecodable rows instead of masking them.

use crate::db::DbError;
use crate::model::application::{
    Application, ApplicationId, ApplicationStatus, AppliedDate, NewApplication, Priority,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const APPLICATION_SELECT_SQL: &str = "SELECT
    id,
    company,
    role,
    date_applied,
    status,
    priority
FROM applications";

const INSERT_SQL: &str = "INSERT INTO applications (
    company,
    role,
    date_applied,
    status,
    priority
) VALUES (?1, ?2, ?3, ?4, ?5);";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for application persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Underlying SQLite failure.
    Db(DbError),
    /// Required text field was empty at the storage boundary.
    EmptyField(&'static str),
    /// A persisted row cannot be decoded into a valid record.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::EmptyField(field) => write!(f, "required field `{field}` is empty"),
            Self::InvalidData(message) => {
                write!(f, "invalid persisted application data: {message}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::EmptyField(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Sort order for listing applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ApplicationOrder {
    /// Insertion order.
    #[default]
    IdAsc,
    IdDesc,
    /// Company name, A-Z.
    CompanyAsc,
    /// Status text, A-Z.
    StatusAsc,
    /// Most wanted first.
    PriorityDesc,
    PriorityAsc,
}

impl ApplicationOrder {
    fn order_by_sql(self) -> &'static str {
        match self {
            Self::IdAsc => "id ASC",
            Self::IdDesc => "id DESC",
            Self::CompanyAsc => "company ASC, id ASC",
            Self::StatusAsc => "status ASC, id ASC",
            Self::PriorityDesc => "priority DESC, id ASC",
            Self::PriorityAsc => "priority ASC, id ASC",
        }
    }
}

/// Repository interface for application records.
pub trait ApplicationRepository {
    fn insert(&self, application: &NewApplication) -> RepoResult<ApplicationId>;
    /// Returns the number of rows changed (`0` when `id` is unknown).
    fn update_status(&self, id: ApplicationId, status: ApplicationStatus) -> RepoResult<usize>;
    /// Returns the number of rows removed (`0` when `id` is unknown).
    fn delete(&self, id: ApplicationId) -> RepoResult<usize>;
    fn get(&self, id: ApplicationId) -> RepoResult<Option<Application>>;
    fn list(&self, order: ApplicationOrder) -> RepoResult<Vec<Application>>;
    fn count(&self) -> RepoResult<u64>;
    /// Raw priority column, in id order.
    fn priorities(&self) -> RepoResult<Vec<Priority>>;
    /// One entry per status present in the table.
    fn status_counts(&self) -> RepoResult<BTreeMap<ApplicationStatus, u64>>;
    /// Removes every row and restarts id assignment at 1.
    fn clear(&self) -> RepoResult<usize>;
}

/// SQLite-backed application repository over one borrowed connection.
pub struct SqliteApplicationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteApplicationRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ApplicationRepository for SqliteApplicationRepository<'_> {
    fn insert(&self, application: &NewApplication) -> RepoResult<ApplicationId> {
        ensure_required("company", &application.company)?;
        ensure_required("role", &application.role)?;

        self.conn.execute(
            INSERT_SQL,
            params![
                application.company.as_str(),
                application.role.as_str(),
                application.date_applied.to_string(),
                application.status.as_str(),
                i64::from(application.priority.get()),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update_status(&self, id: ApplicationId, status: ApplicationStatus) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE applications SET status = ?1 WHERE id = ?2;",
            params![status.as_str(), id],
        )?;
        Ok(changed)
    }

    fn delete(&self, id: ApplicationId) -> RepoResult<usize> {
        let changed = self
            .conn
            .execute("DELETE FROM applications WHERE id = ?1;", [id])?;
        Ok(changed)
    }

    fn get(&self, id: ApplicationId) -> RepoResult<Option<Application>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{APPLICATION_SELECT_SQL} WHERE id = ?1;"))?;
        let row = stmt
            .query_row([id], |row| RawApplicationRow::from_row(row))
            .optional()?;

        row.map(RawApplicationRow::into_application).transpose()
    }

    fn list(&self, order: ApplicationOrder) -> RepoResult<Vec<Application>> {
        let mut stmt = self.conn.prepare(&format!(
            "{APPLICATION_SELECT_SQL} ORDER BY {};",
            order.order_by_sql()
        ))?;
        let mut rows = stmt.query([])?;
        let mut applications = Vec::new();

        while let Some(row) = rows.next()? {
            applications.push(RawApplicationRow::from_row(row)?.into_application()?);
        }

        Ok(applications)
    }

    fn count(&self) -> RepoResult<u64> {
        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM applications;", [], |row| row.get(0))?;
        u64::try_from(total)
            .map_err(|_| RepoError::InvalidData(format!("negative row count {total}")))
    }

    fn priorities(&self) -> RepoResult<Vec<Priority>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, priority FROM applications ORDER BY id ASC;")?;
        let mut rows = stmt.query([])?;
        let mut priorities = Vec::new();

        while let Some(row) = rows.next()? {
            let id: ApplicationId = row.get(0)?;
            let value: i64 = row.get(1)?;
            priorities.push(parse_priority(id, value)?);
        }

        Ok(priorities)
    }

    fn status_counts(&self) -> RepoResult<BTreeMap<ApplicationStatus, u64>> {
        let mut stmt = self
            .conn
            .prepare("SELECT status, COUNT(*) FROM applications GROUP BY status;")?;
        let mut rows = stmt.query([])?;
        let mut counts = BTreeMap::new();

        while let Some(row) = rows.next()? {
            let status_text: String = row.get(0)?;
            let count: i64 = row.get(1)?;
            let status = parse_status(&status_text)?;
            let count = u64::try_from(count).map_err(|_| {
                RepoError::InvalidData(format!("negative count {count} for status `{status}`"))
            })?;
            counts.insert(status, count);
        }

        Ok(counts)
    }

    fn clear(&self) -> RepoResult<usize> {
        let removed = self.conn.execute("DELETE FROM applications;", [])?;
        // sqlite_sequence only exists once an AUTOINCREMENT row was ever written.
        let has_sequence: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'sqlite_sequence'
            );",
            [],
            |row| row.get(0),
        )?;
        if has_sequence == 1 {
            self.conn.execute(
                "DELETE FROM sqlite_sequence WHERE name = 'applications';",
                [],
            )?;
        }
        Ok(removed)
    }
}

/// Column values as stored, before domain decoding.
struct RawApplicationRow {
    id: ApplicationId,
    company: String,
    role: String,
    date_applied: String,
    status: String,
    priority: i64,
}

impl RawApplicationRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            company: row.get("company")?,
            role: row.get("role")?,
            date_applied: row.get("date_applied")?,
            status: row.get("status")?,
            priority: row.get("priority")?,
        })
    }

    fn into_application(self) -> RepoResult<Application> {
        let date_applied = AppliedDate::from_db(&self.date_applied).ok_or_else(|| {
            RepoError::InvalidData(format!(
                "invalid date `{}` in applications.date_applied (id={})",
                self.date_applied, self.id
            ))
        })?;
        let status = parse_status(&self.status)?;
        let priority = parse_priority(self.id, self.priority)?;

        Ok(Application {
            id: self.id,
            company: self.company,
            role: self.role,
            date_applied,
            status,
            priority,
        })
    }
}

fn parse_status(value: &str) -> RepoResult<ApplicationStatus> {
    ApplicationStatus::from_db(value).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{value}` in applications.status"))
    })
}

fn parse_priority(id: ApplicationId, value: i64) -> RepoResult<Priority> {
    Priority::try_from(value).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid priority `{value}` in applications.priority (id={id})"
        ))
    })
}

fn ensure_required(field: &'static str, value: &str) -> RepoResult<()> {
    if value.trim().is_empty() {
        return Err(RepoError::EmptyField(field));
    }
    Ok(())
}
