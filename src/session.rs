//! Playing games: the shared turn loop and the human-vs-AI session.

use log::{debug, info};

use crate::{
    Result,
    game::{Game, GameOutcome, Player},
    hats::HatAgent,
    ports::{Learner, Observer},
};

/// A finished game together with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub game: Game,
    pub outcome: GameOutcome,
}

/// Play one game to the end, `first` opening.
///
/// Neither side learns here; callers decide who learns from the result.
///
/// # Errors
///
/// Fails if a side cannot produce a move or produces an illegal one. Both are
/// defects in that side, not recoverable game conditions.
pub fn play_match<A, B, O>(
    starting_sticks: usize,
    first: &mut A,
    second: &mut B,
    observer: &mut O,
) -> Result<MatchRecord>
where
    A: Learner + ?Sized,
    B: Learner + ?Sized,
    O: Observer + ?Sized,
{
    let mut game = Game::new(starting_sticks)?;
    loop {
        let player = game.to_move();
        let sticks = game.remaining();
        observer.on_turn_start(sticks, player)?;

        let take = match player {
            Player::First => first.select_move(sticks)?,
            Player::Second => second.select_move(sticks)?,
        };
        game.play(take)?;
        if let Some(mv) = game.moves().last() {
            observer.on_move(mv)?;
        }

        if let Some(outcome) = game.outcome() {
            return Ok(MatchRecord { game, outcome });
        }
    }
}

/// Repeated games between an external player and a persistent hat agent.
///
/// The external player always opens. The agent keeps its table between games
/// and learns from every result, exactly as during self-play training.
#[derive(Debug)]
pub struct Session {
    ai: HatAgent,
    starting_sticks: usize,
    games_played: usize,
    ai_wins: usize,
}

impl Session {
    /// Side played by the agent
    pub const AI_SIDE: Player = Player::Second;

    /// # Errors
    /// Returns [`crate::Error::InvalidConfiguration`] if the agent's table does not
    /// cover `starting_sticks`.
    pub fn new(ai: HatAgent, starting_sticks: usize) -> Result<Self> {
        if starting_sticks == 0 {
            return Err(crate::Error::InvalidStickCount {
                sticks: starting_sticks,
            });
        }
        let covered = ai.table().starting_sticks();
        if starting_sticks > covered {
            return Err(crate::Error::InvalidConfiguration {
                message: format!(
                    "agent only has hats for up to {covered} sticks, game starts with {starting_sticks}"
                ),
            });
        }
        info!("starting session with {starting_sticks} sticks");
        Ok(Session {
            ai,
            starting_sticks,
            games_played: 0,
            ai_wins: 0,
        })
    }

    /// Play one game against `opponent` and let both sides learn from it.
    ///
    /// If the game cannot be finished the agent's drawn balls are returned
    /// to their hats before the error is passed on.
    pub fn play<H, O>(&mut self, opponent: &mut H, observer: &mut O) -> Result<GameOutcome>
    where
        H: Learner + ?Sized,
        O: Observer + ?Sized,
    {
        let record = match play_match(self.starting_sticks, opponent, &mut self.ai, observer) {
            Ok(record) => record,
            Err(err) => {
                self.ai.abandon_game()?;
                return Err(err);
            }
        };
        let outcome = record.outcome;

        opponent.learn(outcome, Self::AI_SIDE.opponent())?;
        self.ai.learn(outcome, Self::AI_SIDE)?;

        self.games_played += 1;
        if outcome.is_win_for(Self::AI_SIDE) {
            self.ai_wins += 1;
        }
        debug!(
            "session game {} against {} won by {} ({} AI wins)",
            self.games_played,
            opponent.name(),
            outcome.winner(),
            self.ai_wins
        );
        observer.on_game_end(self.games_played, outcome)?;
        Ok(outcome)
    }

    pub fn ai(&self) -> &HatAgent {
        &self.ai
    }

    pub fn into_ai(self) -> HatAgent {
        self.ai
    }

    pub fn starting_sticks(&self) -> usize {
        self.starting_sticks
    }

    pub fn games_played(&self) -> usize {
        self.games_played
    }

    pub fn ai_wins(&self) -> usize {
        self.ai_wins
    }
}
