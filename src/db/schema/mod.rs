//! Dialect-agnostic database schema definitions.
//!
//! This module provides structured definitions for the relational schema,
//! allowing both SQLite and PostgreSQL DDL to be generated from a single
//! source of truth.
//!
//! # Overview
//!
//! 1. **Core Types** (`definition.rs`):
//!    - `SqlType` - Column data types (Integer, Varchar)
//!    - `ColumnDef` - A single column with nullability, uniqueness, and key flags
//!    - `ForeignKeyDef` - A foreign key with its referential action
//!    - `TableDef` - A complete table
//!
//! 2. **Table Definitions** (`tables.rs`):
//!    - `USERS`, `PROFILES`
//!    - `ALL_TABLES` - Slice for iteration, in creation order
//!
//! 3. **Compilers** (`compilers/`):
//!    - `SqliteCompiler`, `PostgresCompiler`

pub mod compilers;
mod definition;
mod tables;

pub use definition::{ColumnDef, ForeignKeyDef, ReferentialAction, SqlType, TableDef};
pub use tables::{ALL_TABLES, PROFILES, USERS};
