//! SQLite DDL compiler.
//!
//! Generates `CREATE TABLE IF NOT EXISTS` statements from the dialect-agnostic
//! table definitions. SQLite treats `VARCHAR(n)` as plain TEXT and ignores the
//! declared length, so every length-limited column also gets a named
//! `CHECK (length(col) <= n)` constraint. The constraint name (`<table>_<col>_len`)
//! surfaces in the engine error message and is what the error mapper keys on.
//!
//! SQLite resolves foreign keys at DML time, so the mutually-referencing
//! tables can both declare their constraints inline.

use crate::db::schema::definition::{ColumnDef, TableDef};

/// Compiler for generating SQLite DDL from table definitions.
pub struct SqliteCompiler;

impl SqliteCompiler {
    /// Generate the `CREATE TABLE` statement for a single table.
    ///
    /// Produces output in the format:
    /// ```sql
    /// CREATE TABLE IF NOT EXISTS users (
    ///     id INTEGER PRIMARY KEY AUTOINCREMENT,
    ///     name VARCHAR(100) NOT NULL CONSTRAINT users_name_len CHECK (length(name) <= 100),
    ///     ...
    ///     CONSTRAINT users_profile_id_fkey FOREIGN KEY (profile_id)
    ///         REFERENCES profiles (id) ON DELETE SET NULL
    /// )
    /// ```
    pub fn compile_table(table: &TableDef) -> String {
        let mut lines: Vec<String> = table
            .columns
            .iter()
            .map(|col| format!("    {}", Self::column_clause(table.name, col)))
            .collect();

        for fk in table.foreign_keys {
            let mut clause = format!(
                "    CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
                fk.constraint_name(table.name),
                fk.column,
                fk.references_table,
                fk.references_column
            );
            if let Some(action) = fk.on_delete.on_delete_clause() {
                clause.push(' ');
                clause.push_str(action);
            }
            lines.push(clause);
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
            table.name,
            lines.join(",\n")
        )
    }

    /// Generate DDL for all tables, in creation order.
    pub fn compile_all(tables: &[&TableDef]) -> Vec<String> {
        tables.iter().map(|t| Self::compile_table(t)).collect()
    }

    fn column_clause(table_name: &str, col: &ColumnDef) -> String {
        if col.primary_key {
            // AUTOINCREMENT requires the bare INTEGER PRIMARY KEY form.
            return format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", col.name);
        }

        let mut clause = format!("{} {}", col.name, col.sql_type.sql_name());
        if !col.nullable {
            clause.push_str(" NOT NULL");
        }
        if col.unique {
            clause.push_str(" UNIQUE");
        }
        if let Some(len) = col.sql_type.max_length() {
            clause.push_str(&format!(
                " CONSTRAINT {}_{}_len CHECK (length({}) <= {})",
                table_name, col.name, col.name, len
            ));
        }
        clause
    }
}
