//! Output formatting and progress bars for CLI

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{game::GameOutcome, ports::Observer};

/// Create a progress bar for training
pub fn create_training_progress(total_games: u64) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games {msg}")?
            .progress_chars("=>-"),
    );
    Ok(pb)
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Advances a progress bar once per finished training game
pub struct ProgressObserver {
    bar: ProgressBar,
}

impl ProgressObserver {
    pub fn new(bar: ProgressBar) -> Self {
        Self { bar }
    }
}

impl Observer for ProgressObserver {
    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> crate::Result<()> {
        self.bar.inc(1);
        Ok(())
    }

    fn on_training_end(&mut self) -> crate::Result<()> {
        self.bar.finish_with_message("done");
        Ok(())
    }
}
