//! Turn-by-turn game state

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules;

/// A side in the game. `First` always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// 1 for the opening side, 2 for the other
    pub fn number(self) -> u8 {
        match self {
            Player::First => 1,
            Player::Second => 2,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Sticks on the board before the move
    pub sticks: usize,
    pub take: usize,
    pub player: Player,
}

/// Outcome of a finished game.
///
/// The side that removed the last stick loses; there are no draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameOutcome {
    pub loser: Player,
}

impl GameOutcome {
    pub fn winner(self) -> Player {
        self.loser.opponent()
    }

    pub fn is_win_for(self, player: Player) -> bool {
        self.winner() == player
    }
}

/// A game in progress (or finished) with its move history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    remaining: usize,
    to_move: Player,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start a game with `starting_sticks` on the board and `Player::First` to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidStickCount`] when `starting_sticks` is zero.
    pub fn new(starting_sticks: usize) -> crate::Result<Self> {
        if starting_sticks == 0 {
            return Err(crate::Error::InvalidStickCount {
                sticks: starting_sticks,
            });
        }
        Ok(Game {
            remaining: starting_sticks,
            to_move: Player::First,
            moves: Vec::new(),
            outcome: None,
        })
    }

    /// Sticks still on the board
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Side whose turn it is. After the game ends this is the loser.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Legal takes for the side to move
    pub fn legal_moves(&self) -> std::ops::RangeInclusive<usize> {
        rules::legal_moves(self.remaining)
    }

    /// Remove `take` sticks for the side to move.
    ///
    /// Returns the outcome when this move empties the board. The mover who
    /// empties the board loses.
    ///
    /// # Errors
    ///
    /// [`crate::Error::GameOver`] if the game has already finished and
    /// [`crate::Error::IllegalMove`] if `take` is outside `1..=min(3, remaining)`.
    pub fn play(&mut self, take: usize) -> crate::Result<Option<GameOutcome>> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }
        if !rules::is_legal(self.remaining, take) {
            return Err(crate::Error::IllegalMove {
                sticks: self.remaining,
                take,
            });
        }

        self.moves.push(Move {
            sticks: self.remaining,
            take,
            player: self.to_move,
        });
        self.remaining -= take;

        if self.remaining == 0 {
            self.outcome = Some(GameOutcome {
                loser: self.to_move,
            });
        } else {
            self.to_move = self.to_move.opponent();
        }

        Ok(self.outcome)
    }
}
