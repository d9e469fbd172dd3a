//! Core use-case services.
//!
//! # Responsibility
//! - Expose the storage boundary used by CLI callers and reporting.
//! - Keep callers decoupled from connection handling and SQL.

pub mod application_store;
