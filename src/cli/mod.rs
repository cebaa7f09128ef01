pub mod config;
pub mod entropy;
pub mod input;
pub mod matrices;

use crate::errors::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "relmat",
    version,
    about = "Relation matrices and relation entropy for parent/child hierarchies"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the five relation matrices (r1..r5) of a hierarchy
    Matrices(input::InputArgs),
    /// Print relation counts and their Shannon entropy
    Entropy(input::InputArgs),
    /// Inspect resolved configuration
    Config(config::ConfigArgs),
}

/// Dispatch to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Matrices(args) => matrices::run(&args),
        Commands::Entropy(args) => entropy::run(&args),
        Commands::Config(args) => config::run(&args),
    }
}
