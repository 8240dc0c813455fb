//! Self-play training for hat agents

use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use super::agent::HatAgent;
use crate::{
    game::{GameOutcome, Player},
    ports::{Learner, NullObserver, Observer},
    session::play_match,
};

/// Configuration for a training session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub starting_sticks: usize,
    /// Number of self-play games; zero leaves both agents untrained
    pub rounds: usize,
    pub seed: Option<u64>,
}

impl TrainingConfig {
    pub fn new(starting_sticks: usize, rounds: usize) -> Self {
        Self {
            starting_sticks,
            rounds,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Results from training
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingResults {
    pub first_wins: usize,
    pub second_wins: usize,
    /// Opening side's cumulative win rate, sampled every 100 games
    pub first_win_rate_history: Vec<f64>,
}

impl TrainingResults {
    pub fn games(&self) -> usize {
        self.first_wins + self.second_wins
    }

    pub fn first_win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => self.first_wins as f64 / games as f64,
        }
    }

    fn record(&mut self, outcome: GameOutcome) {
        match outcome.winner() {
            Player::First => self.first_wins += 1,
            Player::Second => self.second_wins += 1,
        }
    }
}

/// Two hat agents playing each other, one per side.
///
/// Both agents learn symmetrically after every game. Only the second agent
/// is normally kept afterwards: it is the one that faces a human who opens.
pub struct TrainingSession {
    first: HatAgent,
    second: HatAgent,
    config: TrainingConfig,
    games_played: usize,
    results: TrainingResults,
}

impl TrainingSession {
    /// Create both agents with fresh uniform tables.
    ///
    /// With a configured seed the agents' generators are derived from it, so
    /// the whole run is reproducible.
    ///
    /// # Errors
    /// Returns an error if `starting_sticks` is zero.
    pub fn new(config: TrainingConfig) -> crate::Result<Self> {
        let mut seeder = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        };
        let first = HatAgent::new(config.starting_sticks, Some(seeder.random()))?;
        let second = HatAgent::new(config.starting_sticks, Some(seeder.random()))?;

        Ok(TrainingSession {
            first,
            second,
            config,
            games_played: 0,
            results: TrainingResults::default(),
        })
    }

    /// Run training for the configured number of games
    pub fn train(&mut self) -> crate::Result<()> {
        self.train_observed(&mut NullObserver)
    }

    /// Run training, reporting every game to `observer`
    pub fn train_observed<O>(&mut self, observer: &mut O) -> crate::Result<()>
    where
        O: Observer + ?Sized,
    {
        info!(
            "training for {} games with {} sticks",
            self.config.rounds, self.config.starting_sticks
        );
        observer.on_training_start(self.config.rounds)?;

        for _ in 0..self.config.rounds {
            self.play_training_game(observer)?;
        }

        observer.on_training_end()?;
        info!(
            "training finished: opening side won {:.1}% of {} games",
            self.results.first_win_rate() * 100.0,
            self.results.games()
        );
        Ok(())
    }

    fn play_training_game<O>(&mut self, observer: &mut O) -> crate::Result<()>
    where
        O: Observer + ?Sized,
    {
        let record = play_match(
            self.config.starting_sticks,
            &mut self.first,
            &mut self.second,
            observer,
        )?;
        let outcome = record.outcome;

        self.first.learn(outcome, Player::First)?;
        self.second.learn(outcome, Player::Second)?;

        self.results.record(outcome);
        self.games_played += 1;

        if self.games_played.is_multiple_of(100) {
            let win_rate = self.results.first_win_rate();
            self.results.first_win_rate_history.push(win_rate);
            debug!(
                "{} games played, opening side win rate {win_rate:.3}",
                self.games_played
            );
        }

        observer.on_game_end(self.games_played, outcome)
    }

    /// Agent playing the opening side
    pub fn first(&self) -> &HatAgent {
        &self.first
    }

    /// Agent playing the replying side
    pub fn second(&self) -> &HatAgent {
        &self.second
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }

    pub fn results(&self) -> &TrainingResults {
        &self.results
    }

    /// Keep the replying side's agent for interactive play
    pub fn into_second(self) -> HatAgent {
        self.second
    }
}

/// Pretrain an agent through `rounds` self-play games and return the replying side.
pub fn train(starting_sticks: usize, rounds: usize) -> crate::Result<HatAgent> {
    train_seeded(starting_sticks, rounds, None)
}

/// [`train`] with an optional seed for reproducible runs
pub fn train_seeded(
    starting_sticks: usize,
    rounds: usize,
    seed: Option<u64>,
) -> crate::Result<HatAgent> {
    let config = TrainingConfig {
        starting_sticks,
        rounds,
        seed,
    };
    let mut session = TrainingSession::new(config)?;
    session.train()?;
    Ok(session.into_second())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_number_of_games_is_played() {
        let mut session = TrainingSession::new(TrainingConfig::new(12, 250).with_seed(5)).unwrap();
        session.train().unwrap();
        assert_eq!(session.games_played(), 250);
        assert_eq!(session.results().games(), 250);
        assert_eq!(session.results().first_win_rate_history.len(), 2);
        assert_eq!(session.first().games_learned(), 250);
        assert_eq!(session.second().games_learned(), 250);
        assert!(session.first().outstanding().is_empty());
        assert!(session.second().outstanding().is_empty());
    }

    #[test]
    fn seeded_training_is_reproducible() {
        let a = train_seeded(15, 200, Some(99)).unwrap();
        let b = train_seeded(15, 200, Some(99)).unwrap();
        assert_eq!(a.table(), b.table());
    }

    #[test]
    fn zero_sticks_cannot_be_trained() {
        assert!(train(0, 10).is_err());
    }
}
