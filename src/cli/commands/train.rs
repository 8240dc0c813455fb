//! Train command - pretrain a hat agent through self-play

use std::{fs::File, io::BufWriter, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    app::DEFAULT_TRAINING_ROUNDS,
    cli::output::{ProgressObserver, create_training_progress, print_kv, print_section},
    game::Player,
    hats::{
        AgentStats, SavedHatAgent, TrainingConfig, TrainingMetadata, TrainingResults,
        TrainingSession, write_hat_contents_file,
    },
};

#[derive(Debug, Serialize)]
struct TrainingSummaryFile {
    starting_sticks: usize,
    rounds: usize,
    seed: Option<u64>,
    first_win_rate: f64,
    results: TrainingResults,
    first_agent: AgentStats,
    second_agent: AgentStats,
}

#[derive(Parser, Debug)]
#[command(about = "Train an AI opponent through self-play")]
pub struct TrainArgs {
    /// Sticks on the table initially
    #[arg(long, short = 's', default_value_t = 10)]
    pub sticks: usize,

    /// Number of self-play games
    #[arg(long, short = 'r', default_value_t = DEFAULT_TRAINING_ROUNDS)]
    pub rounds: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file for the trained agent (JSON)
    #[arg(long, short = 'O')]
    pub output: Option<PathBuf>,

    /// Write the trained agent's hat contents to this file
    #[arg(long)]
    pub hat_contents: Option<PathBuf>,

    /// Optional path for writing a summary JSON file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,
}

pub fn execute(args: TrainArgs) -> Result<()> {
    let config = TrainingConfig {
        starting_sticks: args.sticks,
        rounds: args.rounds,
        seed: args.seed,
    };
    let mut session = TrainingSession::new(config).context("failed to set up training")?;

    if args.no_progress {
        session.train()?;
    } else {
        let bar = create_training_progress(args.rounds as u64)?;
        session.train_observed(&mut ProgressObserver::new(bar))?;
    }

    let results = session.results().clone();
    let summary = TrainingSummaryFile {
        starting_sticks: args.sticks,
        rounds: args.rounds,
        seed: args.seed,
        first_win_rate: results.first_win_rate(),
        results,
        first_agent: session.first().stats(),
        second_agent: session.second().stats(),
    };

    print_section("Training Summary");
    print_kv("Sticks", &summary.starting_sticks.to_string());
    print_kv("Games", &summary.rounds.to_string());
    print_kv(
        "Opening side wins",
        &format!("{:.1}%", summary.first_win_rate * 100.0),
    );
    print_kv(
        "Opening agreement",
        &format!("{:.1}%", summary.first_agent.optimal_agreement * 100.0),
    );
    print_kv(
        "Replying agreement",
        &format!("{:.1}%", summary.second_agent.optimal_agreement * 100.0),
    );

    let ai = session.into_second();

    if let Some(path) = &args.hat_contents {
        write_hat_contents_file(ai.table(), path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        print_kv("Hat contents", &path.display().to_string());
    }

    if let Some(path) = &args.output {
        let metadata = TrainingMetadata {
            rounds: Some(args.rounds),
            seed: args.seed,
            side: Some(Player::Second),
            ..Default::default()
        };
        SavedHatAgent::from_agent(&ai, metadata).save(path)?;
        print_kv("Agent", &path.display().to_string());
    }

    if let Some(path) = &args.summary {
        let file = File::create(path)
            .with_context(|| format!("failed to create summary file {}", path.display()))?;
        to_writer_pretty(BufWriter::new(file), &summary)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        print_kv("Summary", &path.display().to_string());
    }

    Ok(())
}
