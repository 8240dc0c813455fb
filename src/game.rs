//! Game of Sticks rules and game management

pub mod engine;
pub mod rules;

pub use engine::{Game, GameOutcome, Move, Player};
pub use rules::{MAX_TAKE, is_legal, is_losing_position, legal_moves, max_take, optimal_moves};
