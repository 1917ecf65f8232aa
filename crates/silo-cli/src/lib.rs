//! silo — operations assistant CLI.
//!
//! Thin command handlers over the `silo-logdna` export client plus a
//! local key-value config store and a deploy-config validator.

pub mod commands;
pub mod config;
pub mod datetime;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "silo", version, about = "Operations assistant for VM Farms deployments")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Store the LogDNA service key
    Config,
    /// Export log lines from LogDNA
    Export(commands::export::ExportArgs),
    /// Validate a deploy config file for common syntax/option errors
    Validate(commands::validate::ValidateArgs),
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Config => commands::config::run(),
        Command::Export(args) => commands::export::run(args),
        Command::Validate(args) => commands::validate::run(&args),
    }
}
