//! Game of Sticks CLI
//!
//! - `play`: play against a friend, an untrained AI or a pretrained AI
//! - `train`: pretrain an AI through self-play and save it

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sticks")]
#[command(version, about = "Game of Sticks with a learning opponent", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game at the console
    Play(sticks::cli::commands::play::PlayArgs),

    /// Pretrain an AI through self-play
    Train(sticks::cli::commands::train::TrainArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => sticks::cli::commands::play::execute(args),
        Commands::Train(args) => sticks::cli::commands::train::execute(args),
    }
}
