//! Core domain logic for SolSearch, a personal job-application tracker.
//! This crate owns the record store and every summary derived from it.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod report;
pub mod service;

pub use config::{StoreConfig, StoreLocation, DEFAULT_DB_FILE_NAME};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::application::{
    Application, ApplicationId, ApplicationStatus, ApplicationValidationError, AppliedDate,
    NewApplication, Priority,
};
pub use repo::application_repo::{
    ApplicationOrder, ApplicationRepository, RepoError, RepoResult, SqliteApplicationRepository,
};
pub use report::chart::{ChartData, PriorityDistribution, StatusChart};
pub use report::export::{
    export_to_path, write_csv, ExportError, ExportTable, DEFAULT_EXPORT_FILE_NAME, EXPORT_HEADER,
};
pub use report::funnel::{FunnelReport, FunnelStage};
pub use report::priority::PriorityStats;
pub use report::{Dashboard, Reporter};
pub use service::application_store::{ApplicationStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
