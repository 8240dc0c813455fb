//! Application configuration

pub mod config;

pub use config::{DEFAULT_TRAINING_ROUNDS, GameConfig, MAX_STICKS, MIN_STICKS};
