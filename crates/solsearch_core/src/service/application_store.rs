//! Application store: the storage boundary callers talk to.
//!
//! # Responsibility
//! - Own the configured database and expose record CRUD.
//! - Open one connection per operation and drop it before returning.
//! - Turn every SQLite failure into a logged, structured `StoreError`.
//!
//! # Invariants
//! - No connection is held across operations (the in-memory anchor holds no
//!   statements or transactions).
//! - Multi-row writes run in one transaction; failures leave no partial rows.

use crate::config::{StoreConfig, StoreLocation};
use crate::db::open_connection;
use crate::db::schema::ensure_schema;
use crate::model::application::{
    Application, ApplicationId, ApplicationStatus, NewApplication, Priority,
};
use crate::repo::application_repo::{
    ApplicationOrder, ApplicationRepository, RepoError, RepoResult, SqliteApplicationRepository,
};
use log::{debug, error, info};
use rusqlite::{Connection, TransactionBehavior};
use std::collections::BTreeMap;
use std::time::Instant;

/// Failure reported by store operations.
pub type StoreError = RepoError;
pub type StoreResult<T> = Result<T, StoreError>;

/// Single-table record store for job applications.
pub struct ApplicationStore {
    config: StoreConfig,
    // Shared-cache memory databases vanish with their last connection.
    _memory_anchor: Option<Connection>,
}

impl ApplicationStore {
    /// Builds a store and ensures the `applications` table exists.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let memory_anchor = match config.location {
            StoreLocation::Memory(_) => Some(open_connection(&config)?),
            StoreLocation::File(_) => None,
        };
        let store = Self {
            config,
            _memory_anchor: memory_anchor,
        };
        store.initialize()?;
        Ok(store)
    }

    /// Creates the table when absent; no-op when it already exists.
    pub fn initialize(&self) -> StoreResult<()> {
        self.run("store_initialize", |conn| {
            ensure_schema(conn)?;
            Ok(())
        })
    }

    /// Persists one application and returns its new id.
    pub fn insert(&self, application: &NewApplication) -> StoreResult<ApplicationId> {
        let id = self.run("application_insert", |conn| {
            SqliteApplicationRepository::new(conn).insert(application)
        })?;
        info!("event=application_insert module=store status=ok id={id}");
        Ok(id)
    }

    /// Persists all applications in one transaction.
    ///
    /// Either every row is written or none is.
    pub fn insert_many(&self, applications: &[NewApplication]) -> StoreResult<Vec<ApplicationId>> {
        let ids = self.run_in_transaction("application_insert_many", |repo| {
            applications
                .iter()
                .map(|application| repo.insert(application))
                .collect::<RepoResult<Vec<_>>>()
        })?;
        info!(
            "event=application_insert_many module=store status=ok count={}",
            ids.len()
        );
        Ok(ids)
    }

    /// Sets the status of one application.
    ///
    /// Returns the affected count: `0` when `id` does not exist, else `1`.
    pub fn update_status(&self, id: ApplicationId, status: ApplicationStatus) -> StoreResult<usize> {
        let affected = self.run("application_update_status", |conn| {
            SqliteApplicationRepository::new(conn).update_status(id, status)
        })?;
        info!(
            "event=application_update_status module=store status=ok id={id} new_status={status} affected={affected}"
        );
        Ok(affected)
    }

    /// Deletes one application.
    ///
    /// Returns the affected count: `0` when `id` does not exist, else `1`.
    pub fn delete(&self, id: ApplicationId) -> StoreResult<usize> {
        let affected = self.run("application_delete", |conn| {
            SqliteApplicationRepository::new(conn).delete(id)
        })?;
        info!("event=application_delete module=store status=ok id={id} affected={affected}");
        Ok(affected)
    }

    pub fn get(&self, id: ApplicationId) -> StoreResult<Option<Application>> {
        self.run("application_get", |conn| {
            SqliteApplicationRepository::new(conn).get(id)
        })
    }

    /// Returns every application in the requested order.
    pub fn query(&self, order: ApplicationOrder) -> StoreResult<Vec<Application>> {
        self.run("application_query", |conn| {
            SqliteApplicationRepository::new(conn).list(order)
        })
    }

    pub fn count(&self) -> StoreResult<u64> {
        self.run("application_count", |conn| {
            SqliteApplicationRepository::new(conn).count()
        })
    }

    /// Every stored priority, without decoding the other columns.
    pub fn priorities(&self) -> StoreResult<Vec<Priority>> {
        self.run("application_priorities", |conn| {
            SqliteApplicationRepository::new(conn).priorities()
        })
    }

    /// Counts records per status, omitting statuses with no records.
    pub fn aggregate_status_counts(&self) -> StoreResult<BTreeMap<ApplicationStatus, u64>> {
        self.run("application_status_counts", |conn| {
            SqliteApplicationRepository::new(conn).status_counts()
        })
    }

    /// Deletes every application and restarts id assignment at 1.
    pub fn reset(&self) -> StoreResult<usize> {
        let removed = self.run_in_transaction("store_reset", |repo| repo.clear())?;
        info!("event=store_reset module=store status=ok removed={removed}");
        Ok(removed)
    }

    fn run<T>(
        &self,
        event: &'static str,
        op: impl FnOnce(&Connection) -> RepoResult<T>,
    ) -> StoreResult<T> {
        let started_at = Instant::now();
        let result = open_connection(&self.config)
            .map_err(RepoError::from)
            .and_then(|conn| op(&conn));
        self.log_outcome(event, started_at, result)
    }

    fn run_in_transaction<T>(
        &self,
        event: &'static str,
        op: impl FnOnce(&SqliteApplicationRepository<'_>) -> RepoResult<T>,
    ) -> StoreResult<T> {
        let started_at = Instant::now();
        let result = open_connection(&self.config)
            .map_err(RepoError::from)
            .and_then(|mut conn| {
                let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
                let value = op(&SqliteApplicationRepository::new(&tx))?;
                tx.commit()?;
                Ok(value)
            });
        self.log_outcome(event, started_at, result)
    }

    fn log_outcome<T>(
        &self,
        event: &'static str,
        started_at: Instant,
        result: StoreResult<T>,
    ) -> StoreResult<T> {
        match &result {
            Ok(_) => debug!(
                "event={} module=store status=ok mode={} duration_ms={}",
                event,
                self.config.mode(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event={} module=store status=error mode={} duration_ms={} error_code={} error={}",
                event,
                self.config.mode(),
                started_at.elapsed().as_millis(),
                error_code(err),
                err
            ),
        }
        result
    }
}

fn error_code(err: &StoreError) -> &'static str {
    match err {
        RepoError::Db(_) => "db_failure",
        RepoError::EmptyField(_) => "empty_required_field",
        RepoError::InvalidData(_) => "invalid_persisted_data",
    }
}
