//! noughts CLI - Tic-Tac-Toe in the terminal
//!
//! This CLI provides:
//! - An interactive game for one player (against the computer) or two
//! - Batch simulations of the computer opponent

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "noughts")]
#[command(version, about = "Tic-Tac-Toe with a minimax computer opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play(noughts::cli::commands::play::PlayArgs),

    /// Play many games of the computer against a scripted opponent
    Simulate(noughts::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => noughts::cli::commands::play::execute(args),
        Commands::Simulate(args) => noughts::cli::commands::simulate::execute(args),
    }
}
