//! Game of Sticks with an opponent that learns by drawing from hats.
//!
//! This crate provides:
//! - The game rules and a turn-by-turn engine (take 1-3 sticks, taking the last stick loses)
//! - A hat-and-beads learning agent with per-position weighted choices
//! - Self-play training and a persistent human-vs-AI session
//! - A console front end for playing and training

pub mod app;
pub mod cli;
pub mod error;
pub mod game;
pub mod hats;
pub mod ports;
pub mod session;
pub mod utils;

pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Player};
pub use hats::{Hat, HatAgent, HatTable, TrainingSession, train};
pub use session::{MatchRecord, Session, play_match};
