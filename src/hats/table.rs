//! Per-position hat table

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::hat::Hat;
use crate::game::{MAX_TAKE, is_losing_position, optimal_moves};

/// One hat for every position from 1 up to the starting stick count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HatTable {
    hats: BTreeMap<usize, Hat>,
}

impl HatTable {
    /// Create a table with a uniform hat for each position `1..=starting_sticks`.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidStickCount`] when `starting_sticks` is zero.
    pub fn new(starting_sticks: usize) -> crate::Result<Self> {
        if starting_sticks == 0 {
            return Err(crate::Error::InvalidStickCount {
                sticks: starting_sticks,
            });
        }
        let hats: BTreeMap<usize, Hat> = (1..=starting_sticks)
            .map(|position| Hat::new(position).map(|hat| (position, hat)))
            .collect::<crate::Result<_>>()?;
        Ok(HatTable { hats })
    }

    /// Build a table from explicit hats.
    ///
    /// The hats must cover every position from 1 to their maximum exactly once.
    pub fn from_hats<I>(hats: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = Hat>,
    {
        let mut map = BTreeMap::new();
        for hat in hats {
            let position = hat.position();
            if map.insert(position, hat).is_some() {
                return Err(crate::Error::InvalidConfiguration {
                    message: format!("duplicate hat for position {position}"),
                });
            }
        }
        let table = HatTable { hats: map };
        table.validate()?;
        Ok(table)
    }

    /// Check that positions are contiguous from 1 and every hat holds legal, non-empty counts.
    pub fn validate(&self) -> crate::Result<()> {
        if self.hats.is_empty() {
            return Err(crate::Error::InvalidStickCount { sticks: 0 });
        }
        for (expected, (&position, hat)) in (1..).zip(&self.hats) {
            if position != expected || hat.position() != position {
                return Err(crate::Error::UnknownPosition { position: expected });
            }
            Hat::from_counts(position, hat.counts())?;
        }
        Ok(())
    }

    /// Largest position in the table
    pub fn starting_sticks(&self) -> usize {
        self.hats.keys().next_back().copied().unwrap_or(0)
    }

    pub fn hat(&self, position: usize) -> Option<&Hat> {
        self.hats.get(&position)
    }

    /// # Errors
    /// Returns [`crate::Error::UnknownPosition`] if no hat exists for `position`.
    pub fn hat_mut(&mut self, position: usize) -> crate::Result<&mut Hat> {
        self.hats
            .get_mut(&position)
            .ok_or(crate::Error::UnknownPosition { position })
    }

    /// Hats in ascending position order
    pub fn iter(&self) -> impl Iterator<Item = &Hat> + '_ {
        self.hats.values()
    }

    /// Ball counts per position, `(1's, 2's, 3's)`
    pub fn counts(&self) -> BTreeMap<usize, [u32; MAX_TAKE]> {
        self.hats
            .iter()
            .map(|(&position, hat)| (position, hat.counts()))
            .collect()
    }

    pub fn total_balls(&self) -> u64 {
        self.hats.values().map(|hat| u64::from(hat.total())).sum()
    }

    /// Fraction of winnable positions whose most likely take is a winning one.
    ///
    /// Positions lost against perfect play have no right answer and are skipped.
    pub fn optimal_agreement(&self) -> f64 {
        let winnable: Vec<&Hat> = self
            .hats
            .values()
            .filter(|hat| !is_losing_position(hat.position()))
            .collect();
        if winnable.is_empty() {
            return 0.0;
        }
        let agreeing = winnable
            .iter()
            .filter(|hat| {
                hat.most_likely()
                    .is_some_and(|take| optimal_moves(hat.position()).contains(&take))
            })
            .count();
        agreeing as f64 / winnable.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn new_table_covers_every_position() {
        let table = HatTable::new(10).unwrap();
        assert_eq!(table.starting_sticks(), 10);
        assert_eq!(table.iter().count(), 10);
        assert!(table.hat(0).is_none());
        assert!(table.hat(11).is_none());
        assert_eq!(table.counts()[&2], [1, 1, 0]);
        assert_eq!(table.total_balls(), 1 + 2 + 3 * 8);
    }

    #[test]
    fn zero_sticks_table_is_rejected() {
        assert!(matches!(
            HatTable::new(0),
            Err(Error::InvalidStickCount { .. })
        ));
    }

    #[test]
    fn hat_mut_reports_unknown_positions() {
        let mut table = HatTable::new(3).unwrap();
        assert!(matches!(
            table.hat_mut(4),
            Err(Error::UnknownPosition { position: 4 })
        ));
        assert!(table.hat_mut(3).is_ok());
    }

    #[test]
    fn from_hats_requires_contiguous_positions() {
        let gap = vec![Hat::new(1).unwrap(), Hat::new(3).unwrap()];
        assert!(HatTable::from_hats(gap).is_err());

        let duplicate = vec![Hat::new(1).unwrap(), Hat::new(1).unwrap()];
        assert!(HatTable::from_hats(duplicate).is_err());

        let table = HatTable::from_hats((1..=4).map(|p| Hat::new(p).unwrap())).unwrap();
        assert_eq!(table, HatTable::new(4).unwrap());
    }

    #[test]
    fn optimal_agreement_scores_most_likely_takes() {
        // Winnable positions 2, 3, 4: the uniform prior picks take 1 on ties,
        // which is only right at position 2.
        let table = HatTable::new(4).unwrap();
        assert!((table.optimal_agreement() - 1.0 / 3.0).abs() < 1e-12);

        let trained = HatTable::from_hats(vec![
            Hat::new(1).unwrap(),
            Hat::from_counts(2, [3, 1, 0]).unwrap(),
            Hat::from_counts(3, [1, 4, 1]).unwrap(),
            Hat::from_counts(4, [1, 1, 6]).unwrap(),
        ])
        .unwrap();
        assert_eq!(trained.optimal_agreement(), 1.0);
    }
}
