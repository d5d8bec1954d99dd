//! `schema` command: print the compiled DDL for a dialect.

use std::error::Error;

use clap::{Args, ValueEnum};
use serde::Serialize;

use crate::db::DatabaseConfig;
use crate::db::schema::ALL_TABLES;
use crate::db::schema::compilers::{PostgresCompiler, SqliteCompiler};
use crate::output::Outputable;

use super::Execute;

/// SQL dialect to compile for.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Sqlite,
    Postgres,
}

#[derive(Args, Debug)]
pub struct SchemaCmd {
    /// SQL dialect to generate DDL for
    #[arg(short = 'D', long, value_enum, default_value = "sqlite")]
    pub dialect: Dialect,
}

/// Compiled DDL for one dialect.
#[derive(Debug, Serialize)]
pub struct SchemaResult {
    pub dialect: Dialect,
    pub statements: Vec<String>,
}

impl Execute for SchemaCmd {
    type Output = SchemaResult;

    // Pure compilation; never touches a database.
    fn execute(self, _config: &DatabaseConfig) -> Result<SchemaResult, Box<dyn Error>> {
        let statements = match self.dialect {
            Dialect::Sqlite => SqliteCompiler::compile_all(ALL_TABLES),
            Dialect::Postgres => PostgresCompiler::compile_all(ALL_TABLES),
        };
        Ok(SchemaResult {
            dialect: self.dialect,
            statements,
        })
    }
}

impl Outputable for SchemaResult {
    fn to_table(&self) -> String {
        let mut script = self
            .statements
            .iter()
            .map(|s| format!("{};", s))
            .collect::<Vec<_>>()
            .join("\n\n");
        script.push('\n');
        script
    }
}
