//! qpath CLI - tabular Q-learning over small deterministic environments
//!
//! This CLI provides:
//! - Training a Q-learning estimator on built-in or file-described
//!   environments, with value-table and policy reports
//! - Validating environment descriptions and their goal reachability

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "qpath")]
#[command(version, about = "Tabular Q-learning for discrete path-finding environments", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a Q-learning estimator and print the learned policy
    Train(qpath::cli::commands::train::TrainArgs),

    /// Validate an environment description
    Check(qpath::cli::commands::check::CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train(args) => qpath::cli::commands::train::execute(args),
        Commands::Check(args) => qpath::cli::commands::check::execute(args),
    }
}
