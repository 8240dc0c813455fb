//! Observer port - hooks for watching games as they are played
//!
//! Observers let training report progress and the console narrate a game
//! without the game loop knowing about either.
//!
//! # Event Sequence
//!
//! 1. `on_training_start(total_games)` - once, training only
//! 2. For each game:
//!    - `on_turn_start(sticks, player)` then `on_move(mv)` for every turn
//!    - `on_game_end(game_num, outcome)`
//! 3. `on_training_end()` - once, training only

use crate::{
    Result,
    game::{GameOutcome, Move, Player},
};

pub trait Observer {
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called before `player` picks a take with `sticks` on the board.
    fn on_turn_start(&mut self, _sticks: usize, _player: Player) -> Result<()> {
        Ok(())
    }

    /// Called after a move has been applied.
    fn on_move(&mut self, _mv: &Move) -> Result<()> {
        Ok(())
    }

    /// Called after both sides have learned from a finished game. `game_num` starts at 1.
    fn on_game_end(&mut self, _game_num: usize, _outcome: GameOutcome) -> Result<()> {
        Ok(())
    }

    fn on_training_end(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {}
