//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for application records.
//! - Isolate SQLite query details from the store and reporting layers.
//!
//! # Invariants
//! - Not-found on update/delete is an affected count of `0`, never an error.
//! - Repository APIs return `InvalidData` for rows that fail decoding.

pub mod application_repo;
