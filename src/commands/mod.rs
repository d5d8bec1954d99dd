//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - Its execution logic and result type

mod schema;
mod setup;

pub use schema::{Dialect, SchemaCmd, SchemaResult};
pub use setup::{SetupCmd, SetupResult};

use clap::Subcommand;
use std::error::Error;

use crate::db::DatabaseConfig;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, config: &DatabaseConfig) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the users and profiles tables on the configured backend
    Setup(SetupCmd),

    /// Print the compiled DDL without touching a database
    Schema(SchemaCmd),

    /// Catch-all for unknown commands
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(
        self,
        config: &DatabaseConfig,
        format: OutputFormat,
    ) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Setup(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
            Command::Schema(cmd) => {
                let result = cmd.execute(config)?;
                Ok(result.format(format))
            }
            Command::Unknown(args) => {
                Err(format!("Unknown command: {}", args.first().unwrap_or(&String::new())).into())
            }
        }
    }
}
