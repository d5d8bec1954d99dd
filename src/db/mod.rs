//! Storage layer for the StudyBuddy schema.
//!
//! This module provides the database abstraction for the crate:
//! - Connection management (SQLite file or in-memory, PostgreSQL)
//! - Schema creation driven by the definitions in `schema`
//! - Minimal row CRUD for the two tables
//!
//! # Architecture
//!
//! All constraint enforcement (not-null, uniqueness, foreign keys, length
//! limits) is delegated to the engine. The backends never pre-validate rows
//! in Rust; they execute the statement and map whatever constraint error the
//! engine raises into a `StoreError` variant.
//!
//! # Type Decisions
//!
//! **Why `i64` ids everywhere?**
//! SQLite rowids are 64-bit. The PostgreSQL columns are declared INTEGER and
//! the backend widens on read, so the model types stay identical across
//! engines.
//!
//! **Why domain-level trait methods instead of a generic query API?**
//! Two tables and a handful of operations don't justify a value/row
//! abstraction spanning rusqlite and postgres. Each backend implements the
//! operations directly in its own parameter syntax.

mod backend;
mod config;
mod postgres;
mod sqlite;

pub mod schema;

pub use backend::StoreBackend;
pub use config::DatabaseConfig;
pub use postgres::PostgresBackend;
pub use sqlite::SqliteBackend;

use thiserror::Error;

/// Storage error types.
///
/// The four constraint variants correspond to the violation classes the
/// engines raise: not-null, uniqueness, foreign-key, and length overflow.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to open database '{path}': {message}")]
    Open { path: String, message: String },

    #[error("connection failed: {message}")]
    Connect { message: String },

    #[error("not-null violation on {column}")]
    NotNull { column: String },

    #[error("uniqueness violation on {constraint}")]
    Unique { constraint: String },

    #[error("foreign-key violation: {detail}")]
    ForeignKey { detail: String },

    #[error("length limit exceeded: {constraint}")]
    Length { constraint: String },

    #[error("query failed: {message}")]
    Query { message: String },
}

impl StoreError {
    /// True for the constraint-violation variants, false for infrastructure
    /// failures.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            StoreError::NotNull { .. }
                | StoreError::Unique { .. }
                | StoreError::ForeignKey { .. }
                | StoreError::Length { .. }
        )
    }
}
