//! Agent serialization support
//!
//! Provides save/load functionality for trained hat agents.

use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use anyhow::{Context, Result, bail};
use log::info;
use serde::{Deserialize, Serialize};

use super::{agent::HatAgent, table::HatTable};
use crate::game::Player;

/// Serializable representation of a trained hat agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedHatAgent {
    /// Version of the save format
    pub version: u32,
    /// Learned ball counts
    pub table: HatTable,
    pub metadata: TrainingMetadata,
}

/// Metadata about the training process
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingMetadata {
    /// Number of self-play games
    pub rounds: Option<usize>,
    /// Random seed used (if any)
    pub seed: Option<u64>,
    /// Side the agent played during training
    pub side: Option<Player>,
    /// Games the agent had learned from when saved
    pub games_learned: usize,
}

impl SavedHatAgent {
    /// Current save format version
    pub const VERSION: u32 = 1;

    /// Snapshot a trained agent. Balls set aside in an unfinished game are not included.
    pub fn from_agent(agent: &HatAgent, mut metadata: TrainingMetadata) -> Self {
        metadata.games_learned = agent.games_learned();
        Self {
            version: Self::VERSION,
            table: agent.table().clone(),
            metadata,
        }
    }

    /// Rebuild a playable agent
    pub fn into_agent(self, seed: Option<u64>) -> Result<HatAgent> {
        self.table
            .validate()
            .context("saved agent contains an invalid hat table")?;
        Ok(HatAgent::from_table(self.table, seed))
    }

    /// Save to a JSON file
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("failed to create agent file {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .with_context(|| format!("failed to write agent to {}", path.display()))?;
        info!("saved agent to {}", path.display());
        Ok(())
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("failed to open agent file {}", path.display()))?;
        let saved: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("failed to parse agent file {}", path.display()))?;
        if saved.version != Self::VERSION {
            bail!(
                "unsupported agent file version {} (expected {})",
                saved.version,
                Self::VERSION
            );
        }
        info!(
            "loaded agent with {} hats from {}",
            saved.table.starting_sticks(),
            path.display()
        );
        Ok(saved)
    }
}
