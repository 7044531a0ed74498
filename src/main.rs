//! Bulls and Cows - CLI
//!
//! Interactive code-breaking game with entropy and mutual-information
//! readouts for every guess.

use anyhow::Result;
use bullscows_entropy::commands::run_play;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bullscows_entropy",
    about = "Bulls and Cows code-breaking game with information-theoretic feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed the secret generator for a reproducible game
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game mode (default)
    Play,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(cli.seed).map_err(|e| anyhow::anyhow!(e)),
    }
}
