//! Driftwatch CLI
//!
//! Command-line interface for comparing management-server content
//! exports and building bulk-retrieval requests from the result.

use clap::{Parser, Subcommand};
use driftwatch_core::logging_facility::{init, Profile};

mod commands;
mod report;

#[derive(Debug, Parser)]
#[command(name = "driftwatch")]
#[command(about = "Driftwatch - content drift comparison for management servers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two collection exports and partition the result
    Compare(commands::compare::CompareArgs),
    /// Build a bulk-retrieval request from a comparison report
    Export(commands::export::ExportArgs),
    /// Write canonical records and digests for one collection
    Canon(commands::canon::CanonArgs),
}

fn main() {
    init(Profile::Development);
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compare(args) => commands::compare::execute(args),
        Commands::Export(args) => commands::export::execute(args),
        Commands::Canon(args) => commands::canon::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
