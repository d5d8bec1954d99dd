//! PostgreSQL DDL compiler.
//!
//! Generates `CREATE TABLE IF NOT EXISTS` statements plus any deferred
//! `ALTER TABLE ... ADD CONSTRAINT` statements. PostgreSQL validates foreign
//! key targets at definition time, and the two tables reference each other,
//! so a foreign key pointing at a table that has not been created yet cannot
//! be declared inline. The compiler tracks which tables exist as it walks the
//! creation order and defers forward references to ALTER statements emitted
//! at the end.
//!
//! Deferred constraints are emitted as a DROP IF EXISTS / ADD pair so the
//! whole script stays idempotent.
//!
//! `VARCHAR(n)` is enforced natively by PostgreSQL, so no CHECK constraints
//! are generated.

use crate::db::schema::definition::{ColumnDef, ForeignKeyDef, TableDef};

/// Compiler for generating PostgreSQL DDL from table definitions.
pub struct PostgresCompiler;

impl PostgresCompiler {
    /// Generate the `CREATE TABLE` statement for a single table.
    ///
    /// `created` lists the tables that already exist at this point in the
    /// script; foreign keys targeting anything else are returned separately
    /// for deferred emission.
    pub fn compile_table<'a>(
        table: &'a TableDef,
        created: &[&str],
    ) -> (String, Vec<&'a ForeignKeyDef>) {
        let mut lines: Vec<String> = table
            .columns
            .iter()
            .map(|col| format!("    {}", Self::column_clause(col)))
            .collect();

        let mut deferred = Vec::new();
        for fk in table.foreign_keys {
            // Self-references are fine inline; the table exists by the time
            // the constraint is checked.
            if created.contains(&fk.references_table) || fk.references_table == table.name {
                lines.push(format!("    {}", Self::foreign_key_clause(table.name, fk)));
            } else {
                deferred.push(fk);
            }
        }

        let create = format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
            table.name,
            lines.join(",\n")
        );
        (create, deferred)
    }

    /// Generate DDL for all tables, in creation order, followed by the
    /// ALTER statements for any foreign keys that had to be deferred.
    pub fn compile_all(tables: &[&TableDef]) -> Vec<String> {
        let mut statements = Vec::new();
        let mut alters = Vec::new();
        let mut created: Vec<&str> = Vec::new();

        for table in tables {
            let (create, deferred) = Self::compile_table(table, &created);
            statements.push(create);
            created.push(table.name);

            for fk in deferred {
                let name = fk.constraint_name(table.name);
                alters.push(format!(
                    "ALTER TABLE {} DROP CONSTRAINT IF EXISTS {}",
                    table.name, name
                ));
                alters.push(format!(
                    "ALTER TABLE {} ADD {}",
                    table.name,
                    Self::foreign_key_clause(table.name, fk)
                ));
            }
        }

        statements.extend(alters);
        statements
    }

    fn column_clause(col: &ColumnDef) -> String {
        if col.primary_key {
            return format!("{} INTEGER GENERATED ALWAYS AS IDENTITY PRIMARY KEY", col.name);
        }

        let mut clause = format!("{} {}", col.name, col.sql_type.sql_name());
        if !col.nullable {
            clause.push_str(" NOT NULL");
        }
        if col.unique {
            clause.push_str(" UNIQUE");
        }
        clause
    }

    fn foreign_key_clause(table_name: &str, fk: &ForeignKeyDef) -> String {
        let mut clause = format!(
            "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
            fk.constraint_name(table_name),
            fk.column,
            fk.references_table,
            fk.references_column
        );
        if let Some(action) = fk.on_delete.on_delete_clause() {
            clause.push(' ');
            clause.push_str(action);
        }
        clause
    }
}
