//! Hat agent that learns the Game of Sticks from its own results.

use std::collections::BTreeMap;

use log::trace;
use rand::{SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::table::HatTable;
use crate::{
    game::{GameOutcome, Player},
    ports::Learner,
};

/// Copies of a winning take put back into its hat after a win
pub const WIN_COPIES: u32 = 2;

/// Hat-and-beads learning agent
///
/// Owns its hat table and random number generator outright. Balls drawn
/// during a game are kept beside the hats until [`HatAgent::reinforce`]
/// decides what goes back in.
pub struct HatAgent {
    table: HatTable,
    /// Ball drawn at each position this game
    besides: BTreeMap<usize, usize>,
    rng: StdRng,
    games_learned: usize,
}

impl std::fmt::Debug for HatAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HatAgent")
            .field("starting_sticks", &self.table.starting_sticks())
            .field("besides", &self.besides)
            .field("games_learned", &self.games_learned)
            .finish()
    }
}

impl HatAgent {
    /// Create an untrained agent for games of up to `starting_sticks`.
    ///
    /// # Errors
    /// Returns an error if `starting_sticks` is zero.
    pub fn new(starting_sticks: usize, seed: Option<u64>) -> crate::Result<Self> {
        Ok(Self::from_table(HatTable::new(starting_sticks)?, seed))
    }

    /// Wrap an existing table, e.g. one loaded from disk.
    pub fn from_table(table: HatTable, seed: Option<u64>) -> Self {
        HatAgent {
            table,
            besides: BTreeMap::new(),
            rng: seeded_rng(seed),
            games_learned: 0,
        }
    }

    pub fn table(&self) -> &HatTable {
        &self.table
    }

    /// Balls drawn in the current game, position -> take
    pub fn outstanding(&self) -> &BTreeMap<usize, usize> {
        &self.besides
    }

    /// Number of finished games this agent has learned from
    pub fn games_learned(&self) -> usize {
        self.games_learned
    }

    /// Draw a take from the hat for `position` and set the ball aside.
    ///
    /// # Errors
    /// - [`crate::Error::UnknownPosition`] if the table has no hat for `position`
    /// - [`crate::Error::PositionAlreadyPlayed`] if a ball for `position` is already aside
    /// - [`crate::Error::EmptyHat`] if the hat has run out of balls
    pub fn choose(&mut self, position: usize) -> crate::Result<usize> {
        if self.besides.contains_key(&position) {
            return Err(crate::Error::PositionAlreadyPlayed { position });
        }
        let hat = self.table.hat_mut(position)?;
        let take = hat.draw(&mut self.rng)?;
        trace!("drew {take} from hat {position}");
        self.besides.insert(position, take);
        Ok(take)
    }

    /// Learn from the finished game and clear the balls set aside.
    ///
    /// After a win every drawn ball goes back with [`WIN_COPIES`] extra
    /// copies in total. After a loss the drawn balls stay out, but each
    /// visited hat is restocked so no legal take is missing.
    pub fn reinforce(&mut self, won: bool) -> crate::Result<()> {
        let besides = std::mem::take(&mut self.besides);
        for (position, take) in besides {
            let hat = self.table.hat_mut(position)?;
            if won {
                hat.add(take, WIN_COPIES)?;
            } else {
                hat.restock();
            }
        }
        self.games_learned += 1;
        Ok(())
    }

    /// Put every ball set aside back into its hat without learning.
    pub fn abandon_game(&mut self) -> crate::Result<()> {
        let besides = std::mem::take(&mut self.besides);
        for (position, take) in besides {
            self.table.hat_mut(position)?.add(take, 1)?;
        }
        Ok(())
    }

    /// Get statistics about the agent
    pub fn stats(&self) -> AgentStats {
        let hats = self.table.iter().count();
        let avg_entropy = if hats == 0 {
            0.0
        } else {
            self.table.iter().map(|hat| hat.entropy()).sum::<f64>() / hats as f64
        };
        AgentStats {
            hats,
            total_balls: self.table.total_balls(),
            avg_entropy,
            optimal_agreement: self.table.optimal_agreement(),
        }
    }
}

impl Learner for HatAgent {
    fn select_move(&mut self, sticks: usize) -> crate::Result<usize> {
        self.choose(sticks)
    }

    fn learn(&mut self, outcome: GameOutcome, role: Player) -> crate::Result<()> {
        self.reinforce(outcome.is_win_for(role))
    }

    fn name(&self) -> &str {
        "Hat AI"
    }
}

/// Statistics about a hat agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentStats {
    pub hats: usize,
    pub total_balls: u64,
    pub avg_entropy: f64,
    pub optimal_agreement: f64,
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn choose_sets_the_ball_aside() {
        let mut agent = HatAgent::new(5, Some(1)).unwrap();
        let take = agent.choose(5).unwrap();
        assert_eq!(agent.outstanding().get(&5), Some(&take));
        assert_eq!(agent.table().hat(5).unwrap().total(), 2);
    }

    #[test]
    fn choosing_the_same_position_twice_fails() {
        let mut agent = HatAgent::new(5, Some(1)).unwrap();
        agent.choose(4).unwrap();
        assert!(matches!(
            agent.choose(4),
            Err(Error::PositionAlreadyPlayed { position: 4 })
        ));
    }

    #[test]
    fn choosing_outside_the_table_fails() {
        let mut agent = HatAgent::new(5, Some(1)).unwrap();
        assert!(matches!(
            agent.choose(6),
            Err(Error::UnknownPosition { position: 6 })
        ));
        assert!(matches!(
            agent.choose(0),
            Err(Error::UnknownPosition { position: 0 })
        ));
    }

    #[test]
    fn win_adds_two_copies_to_each_drawn_take() {
        let mut agent = HatAgent::new(8, Some(9)).unwrap();
        let first = agent.choose(8).unwrap();
        let second = agent.choose(3).unwrap();
        let after_draw = agent.table().clone();

        agent.reinforce(true).unwrap();

        assert!(agent.outstanding().is_empty());
        assert_eq!(
            agent.table().hat(8).unwrap().count(first),
            after_draw.hat(8).unwrap().count(first) + 2
        );
        assert_eq!(
            agent.table().hat(3).unwrap().count(second),
            after_draw.hat(3).unwrap().count(second) + 2
        );
        for position in [1, 2, 4, 5, 6, 7] {
            assert_eq!(agent.table().hat(position), after_draw.hat(position));
        }
        assert_eq!(agent.games_learned(), 1);
    }

    #[test]
    fn loss_restocks_without_returning_the_drawn_ball() {
        let mut agent = HatAgent::new(6, Some(2)).unwrap();
        agent.table.hat_mut(6).unwrap().add(2, 4).unwrap();
        // Hat 6 now holds (1, 5, 1); whatever is drawn, the total drops by one
        // unless the last copy of a take was drawn and gets restocked.
        let take = agent.choose(6).unwrap();
        agent.reinforce(false).unwrap();

        let hat = agent.table().hat(6).unwrap();
        if take == 2 {
            assert_eq!(hat.counts(), [1, 4, 1]);
        } else {
            assert_eq!(hat.counts(), [1, 5, 1]);
        }
    }

    #[test]
    fn abandon_game_returns_balls() {
        let mut agent = HatAgent::new(7, Some(4)).unwrap();
        let fresh = agent.table().clone();
        agent.choose(7).unwrap();
        agent.choose(2).unwrap();
        agent.abandon_game().unwrap();
        assert_eq!(agent.table(), &fresh);
        assert!(agent.outstanding().is_empty());
        assert_eq!(agent.games_learned(), 0);
    }

    #[test]
    fn seeded_agents_draw_identically() {
        let mut a = HatAgent::new(30, Some(77)).unwrap();
        let mut b = HatAgent::new(30, Some(77)).unwrap();
        for position in (1..=30).rev() {
            assert_eq!(a.choose(position).unwrap(), b.choose(position).unwrap());
        }
    }
}
