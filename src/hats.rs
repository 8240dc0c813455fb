//! Hat-and-beads learning system
//!
//! Every position (sticks remaining) owns a hat of balls, one ball per
//! copy of a take. The agent plays by drawing a ball at random and learns
//! by putting extra copies back after a win, or by restocking missing
//! takes after a loss.

pub mod agent;
pub mod hat;
pub mod report;
pub mod serialization;
pub mod table;
pub mod training;

pub use agent::{AgentStats, HatAgent, WIN_COPIES};
pub use hat::Hat;
pub use report::{HAT_CONTENTS_HEADER, write_hat_contents, write_hat_contents_file};
pub use serialization::{SavedHatAgent, TrainingMetadata};
pub use table::HatTable;
pub use training::{TrainingConfig, TrainingResults, TrainingSession, train, train_seeded};
