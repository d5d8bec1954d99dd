//! DDL compilers for each supported dialect.
//!
//! Both compilers consume the same table definitions from `super::tables`,
//! keeping the two dialects generated from a single source of truth.

mod postgres;
mod sqlite;

pub use postgres::PostgresCompiler;
pub use sqlite::SqliteCompiler;
