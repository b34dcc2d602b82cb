use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod error;
mod generator;
mod logger;
mod options;
mod utils;
use commands::cmd_generate;
use logger::{ConsoleLogger, Logger};
use options::GenerateArgs;

/// modelgen command-line interface.
#[derive(Parser, Debug)]
#[command(name = "modelgen", author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate models for the given tables based on their columns.
    GenerateModel(GenerateArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::GenerateModel(args) => cmd_generate(args).await,
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ConsoleLogger.error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
