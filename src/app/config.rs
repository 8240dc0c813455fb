//! Configuration for interactive games.

use serde::{Deserialize, Serialize};

use crate::hats::TrainingConfig;

/// Fewest sticks offered for interactive play
pub const MIN_STICKS: usize = 10;
/// Most sticks offered for interactive play
pub const MAX_STICKS: usize = 100;
/// Self-play games used for the trained opponent
pub const DEFAULT_TRAINING_ROUNDS: usize = 1000;

/// Configuration for a human-vs-AI run.
///
/// # Examples
///
/// ```
/// use sticks::app::GameConfig;
///
/// let config = GameConfig::new(20).with_training_rounds(500).with_seed(42);
/// assert!(config.validate().is_ok());
/// assert!(GameConfig::new(5).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub starting_sticks: usize,
    /// Self-play games before the first human game; zero means an untrained opponent
    pub training_rounds: usize,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Uses the default training rounds and no seed.
    pub fn new(starting_sticks: usize) -> Self {
        Self {
            starting_sticks,
            training_rounds: DEFAULT_TRAINING_ROUNDS,
            seed: None,
        }
    }

    pub fn with_training_rounds(mut self, rounds: usize) -> Self {
        self.training_rounds = rounds;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the starting stick count lies in `MIN_STICKS..=MAX_STICKS`.
    pub fn validate(&self) -> crate::Result<()> {
        if !(MIN_STICKS..=MAX_STICKS).contains(&self.starting_sticks) {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "starting sticks must be between {MIN_STICKS} and {MAX_STICKS}, got {}",
                    self.starting_sticks
                ),
            });
        }
        Ok(())
    }

    /// Self-play settings for pretraining the opponent
    pub fn training_config(&self) -> TrainingConfig {
        TrainingConfig {
            starting_sticks: self.starting_sticks,
            rounds: self.training_rounds,
            seed: self.seed,
        }
    }
}
