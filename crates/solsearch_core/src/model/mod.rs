//! Domain model for tracked job applications.
//!
//! # Responsibility
//! - Define the canonical record and its typed fields.
//! - Keep user-input validation next to the types it protects.
//!
//! # Invariants
//! - Every persisted record is identified by a store-assigned `ApplicationId`.
//! - Status and priority types cannot hold out-of-set values.

pub mod application;
