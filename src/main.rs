use clap::Parser;

mod cli;
mod commands;
mod config;
mod db;
mod models;
mod output;

use cli::Args;
use db::DatabaseConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = DatabaseConfig::resolve(args.db.as_deref())?;
    let output = args.command.run(&config, args.format)?;
    println!("{}", output);
    Ok(())
}
