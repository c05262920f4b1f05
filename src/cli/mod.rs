//! Command-line interface wiring for the `student-record` binary.
//!
//! This module owns the clap definitions and delegates execution to the
//! record command handlers.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

pub mod common;
pub mod record;
pub mod utils;

/// Parsed CLI entrypoint for the `student-record` binary.
#[derive(Parser, Debug)]
#[command(
    name = "student-record",
    version,
    about = "Build a student record from module grades and report on it"
)]
pub struct Cli {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Reports available for a single record.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the full record summary.
    Summary(common::RecordArgs),
    /// Print the average grade only.
    Average(common::RecordArgs),
    /// List module codes and grades in entry order.
    Grades(common::RecordArgs),
}

/// Execute the requested command.
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Summary(args) => record::summary(args),
        Command::Average(args) => record::average(args),
        Command::Grades(args) => record::grades(args),
    }
}
