//! Hat implementation

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    game::{MAX_TAKE, is_legal, legal_moves},
    utils::{entropy_from_counts, weighted_sample},
};

/// A hat of balls for a single position.
///
/// Balls are stored as counts per take rather than as a literal list, so a
/// hat with counts `(2, 0, 5)` holds two `1`-balls and five `3`-balls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hat {
    /// Sticks remaining when this hat is used
    position: usize,
    /// Ball counts indexed by `take - 1`
    balls: [u32; MAX_TAKE],
}

impl Hat {
    /// Create a hat holding exactly one ball for each legal take.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidStickCount`] for position 0, which has no legal takes.
    pub fn new(position: usize) -> crate::Result<Self> {
        if position == 0 {
            return Err(crate::Error::InvalidStickCount { sticks: position });
        }
        let mut balls = [0; MAX_TAKE];
        for take in legal_moves(position) {
            balls[take - 1] = 1;
        }
        Ok(Hat { position, balls })
    }

    /// Create a hat with explicit ball counts.
    ///
    /// # Errors
    /// Rejects counts for illegal takes and hats with no balls at all.
    pub fn from_counts(position: usize, counts: [u32; MAX_TAKE]) -> crate::Result<Self> {
        let illegal_balls =
            (1..=MAX_TAKE).any(|take| counts[take - 1] > 0 && !is_legal(position, take));
        if position == 0 || illegal_balls || counts.iter().all(|&c| c == 0) {
            return Err(crate::Error::InvalidHatCounts { position, counts });
        }
        Ok(Hat {
            position,
            balls: counts,
        })
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of balls for `take` (0 for takes that are not legal here)
    pub fn count(&self, take: usize) -> u32 {
        if (1..=MAX_TAKE).contains(&take) {
            self.balls[take - 1]
        } else {
            0
        }
    }

    /// Counts for takes 1, 2 and 3
    pub fn counts(&self) -> [u32; MAX_TAKE] {
        self.balls
    }

    pub fn total(&self) -> u32 {
        self.balls.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Draw one ball uniformly at random and remove it from the hat.
    ///
    /// # Errors
    /// Returns [`crate::Error::EmptyHat`] if no balls are left.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> crate::Result<usize> {
        let items: Vec<(usize, u32)> = legal_moves(self.position)
            .map(|take| (take, self.balls[take - 1]))
            .collect();

        let take = weighted_sample(rng, &items).ok_or(crate::Error::EmptyHat {
            position: self.position,
        })?;
        self.balls[take - 1] -= 1;
        Ok(take)
    }

    /// Put `copies` balls for `take` into the hat.
    ///
    /// # Errors
    /// Returns [`crate::Error::IllegalMove`] if `take` is not legal at this position.
    pub fn add(&mut self, take: usize, copies: u32) -> crate::Result<()> {
        if !is_legal(self.position, take) {
            return Err(crate::Error::IllegalMove {
                sticks: self.position,
                take,
            });
        }
        let count = &mut self.balls[take - 1];
        *count = count.saturating_add(copies);
        Ok(())
    }

    /// Make sure every legal take has at least one ball.
    ///
    /// Existing balls are never removed. Returns the takes that were added.
    pub fn restock(&mut self) -> Vec<usize> {
        let mut added = Vec::new();
        for take in legal_moves(self.position) {
            if self.balls[take - 1] == 0 {
                self.balls[take - 1] = 1;
                added.push(take);
            }
        }
        added
    }

    /// Probability of drawing each legal take
    pub fn distribution(&self) -> Vec<(usize, f64)> {
        let total = f64::from(self.total());
        legal_moves(self.position)
            .map(|take| {
                let p = if total > 0.0 {
                    f64::from(self.balls[take - 1]) / total
                } else {
                    0.0
                };
                (take, p)
            })
            .collect()
    }

    /// Take with the most balls. Ties go to the smaller take.
    pub fn most_likely(&self) -> Option<usize> {
        legal_moves(self.position)
            .filter(|&take| self.balls[take - 1] > 0)
            .max_by(|&a, &b| self.balls[a - 1].cmp(&self.balls[b - 1]).then(b.cmp(&a)))
    }

    /// Shannon entropy of the draw distribution
    pub fn entropy(&self) -> f64 {
        entropy_from_counts(self.balls)
    }
}
