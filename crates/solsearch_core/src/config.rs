//! Store configuration passed in at construction time.
//!
//! # Responsibility
//! - Describe where the application table lives and how connections behave.
//! - Replace process-wide constants so tests can run against isolated stores.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Database file name used when no path is configured.
pub const DEFAULT_DB_FILE_NAME: &str = "solsearch.db";

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

static MEMORY_STORE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Physical location of the SQLite database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    /// On-disk database file, created on first use.
    File(PathBuf),
    /// Named shared-cache in-memory database.
    ///
    /// Lives as long as the owning `ApplicationStore`.
    Memory(String),
}

/// Construction-time settings for `ApplicationStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub location: StoreLocation,
    /// How long one operation waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl StoreConfig {
    /// Config for an on-disk database at `path`.
    pub fn file(path: impl AsRef<Path>) -> Self {
        Self {
            location: StoreLocation::File(path.as_ref().to_path_buf()),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    /// Config for a fresh, process-unique in-memory database.
    pub fn in_memory() -> Self {
        let seq = MEMORY_STORE_SEQ.fetch_add(1, Ordering::Relaxed);
        Self {
            location: StoreLocation::Memory(format!(
                "solsearch-mem-{}-{seq}",
                std::process::id()
            )),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }

    /// Short label for log lines; never includes the full path.
    pub(crate) fn mode(&self) -> &'static str {
        match self.location {
            StoreLocation::File(_) => "file",
            StoreLocation::Memory(_) => "memory",
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::file(DEFAULT_DB_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::{StoreConfig, StoreLocation, DEFAULT_DB_FILE_NAME};
    use std::path::PathBuf;
    use std::time::Duration;

    #[test]
    fn default_points_at_local_db_file() {
        let config = StoreConfig::default();
        assert_eq!(
            config.location,
            StoreLocation::File(PathBuf::from(DEFAULT_DB_FILE_NAME))
        );
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
    }

    #[test]
    fn in_memory_configs_are_distinct() {
        let first = StoreConfig::in_memory();
        let second = StoreConfig::in_memory();
        assert_ne!(first.location, second.location);
        assert_eq!(first.mode(), "memory");
    }
}
