//! Learner port - abstraction for anything that can take a turn

use crate::{
    Result,
    game::{GameOutcome, Player},
};

/// A seat in the game: picks a take each turn and may learn from the result.
///
/// # Examples
///
/// ```
/// use sticks::{ports::FnPlayer, session::play_match, ports::NullObserver};
///
/// let mut cautious = FnPlayer::new("cautious", |_sticks| Ok(1));
/// let mut greedy = FnPlayer::new("greedy", |sticks: usize| Ok(sticks.min(3)));
/// let record = play_match(5, &mut cautious, &mut greedy, &mut NullObserver).unwrap();
/// assert_eq!(record.game.remaining(), 0);
/// ```
pub trait Learner {
    /// Select how many sticks to take with `sticks` remaining.
    ///
    /// # Errors
    ///
    /// Implementations return an error when they cannot produce a move, for
    /// example an agent whose hat for this position is empty.
    fn select_move(&mut self, sticks: usize) -> Result<usize>;

    /// Update the learner after a game completes.
    ///
    /// # Default Implementation
    ///
    /// Does nothing, suitable for players that do not adapt.
    fn learn(&mut self, _outcome: GameOutcome, _role: Player) -> Result<()> {
        Ok(())
    }

    /// Get the learner's name.
    fn name(&self) -> &str;
}

/// Adapter turning a move-selection function into a [`Learner`].
///
/// Used for external move sources such as a human at the console or a
/// fixed script in tests.
pub struct FnPlayer<F> {
    name: String,
    select: F,
}

impl<F> FnPlayer<F>
where
    F: FnMut(usize) -> Result<usize>,
{
    pub fn new(name: impl Into<String>, select: F) -> Self {
        Self {
            name: name.into(),
            select,
        }
    }
}

impl<F> Learner for FnPlayer<F>
where
    F: FnMut(usize) -> Result<usize>,
{
    fn select_move(&mut self, sticks: usize) -> Result<usize> {
        (self.select)(sticks)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hats::HatAgent;

    #[test]
    fn seats_report_their_names() {
        let player = FnPlayer::new("Player 1", |_| Ok(1));
        assert_eq!(player.name(), "Player 1");
        let ai = HatAgent::new(10, Some(1)).unwrap();
        assert_eq!(ai.name(), "Hat AI");
    }
}
