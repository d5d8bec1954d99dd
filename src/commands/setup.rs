//! `setup` command: create the schema on the configured backend.

use std::error::Error;

use clap::Args;
use serde::Serialize;

use crate::db::DatabaseConfig;
use crate::db::schema::ALL_TABLES;
use crate::output::Outputable;

use super::Execute;

#[derive(Args, Debug)]
pub struct SetupCmd {}

/// Per-table outcome of a setup run.
#[derive(Debug, Serialize)]
pub struct TableStatus {
    pub name: String,
    /// True when this run created the table, false when it already existed.
    pub created: bool,
}

#[derive(Debug, Serialize)]
pub struct SetupResult {
    pub backend: String,
    pub tables: Vec<TableStatus>,
}

impl Execute for SetupCmd {
    type Output = SetupResult;

    fn execute(self, config: &DatabaseConfig) -> Result<SetupResult, Box<dyn Error>> {
        let mut db = config.connect()?;

        let mut existed = Vec::new();
        for table in ALL_TABLES {
            if db.table_exists(table.name)? {
                existed.push(table.name);
            }
        }

        db.create_schema()?;

        let tables = ALL_TABLES
            .iter()
            .map(|table| TableStatus {
                name: table.name.to_string(),
                created: !existed.contains(&table.name),
            })
            .collect();

        Ok(SetupResult {
            backend: db.backend_name().to_string(),
            tables,
        })
    }
}

impl Outputable for SetupResult {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("Schema ready ({})", self.backend), String::new()];
        for table in &self.tables {
            let status = if table.created { "created" } else { "exists" };
            lines.push(format!("  {:<10} {}", table.name, status));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args as CliArgs;
    use clap::Parser;
    use rstest::rstest;

    #[rstest]
    fn test_setup_parses_without_args() {
        let result = CliArgs::try_parse_from(["studybuddy_db", "setup"]);
        assert!(result.is_ok());
    }

    #[rstest]
    fn test_setup_rejects_positional_args() {
        let result = CliArgs::try_parse_from(["studybuddy_db", "setup", "extra"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_execute_creates_tables_in_memory() {
        let result = SetupCmd {}.execute(&DatabaseConfig::Memory).unwrap();
        assert_eq!(result.backend, "Sqlite");
        assert_eq!(result.tables.len(), 2);
        assert!(result.tables.iter().all(|t| t.created));
    }

    #[test]
    fn test_execute_reports_existing_tables_on_rerun() {
        // Two setup runs against the same file: the second must find
        // everything in place.
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig::Sqlite {
            path: dir.path().join("setup.sqlite"),
        };

        let first = SetupCmd {}.execute(&config).unwrap();
        assert!(first.tables.iter().all(|t| t.created));

        let second = SetupCmd {}.execute(&config).unwrap();
        assert!(second.tables.iter().all(|t| !t.created));
    }

    #[test]
    fn test_to_table_lists_tables() {
        let result = SetupCmd {}.execute(&DatabaseConfig::Memory).unwrap();
        let table = result.to_table();
        assert!(table.contains("Schema ready (Sqlite)"));
        assert!(table.contains("users"));
        assert!(table.contains("profiles"));
        assert!(table.contains("created"));
    }
}
