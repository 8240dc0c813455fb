//! Move generation and perfect-play analysis.
//!
//! Each turn a side removes between one and [`MAX_TAKE`] sticks, never more
//! than remain. Whoever removes the last stick loses.

use std::ops::RangeInclusive;

/// Most sticks a side may take in one turn
pub const MAX_TAKE: usize = 3;

/// Largest legal take with `sticks` remaining
pub fn max_take(sticks: usize) -> usize {
    sticks.min(MAX_TAKE)
}

/// Legal takes with `sticks` remaining: `1..=min(3, sticks)`.
///
/// The range is empty only when no sticks remain.
///
/// # Examples
///
/// ```
/// use sticks::game::legal_moves;
///
/// assert_eq!(legal_moves(10).collect::<Vec<_>>(), vec![1, 2, 3]);
/// assert_eq!(legal_moves(2).collect::<Vec<_>>(), vec![1, 2]);
/// assert!(legal_moves(0).next().is_none());
/// ```
pub fn legal_moves(sticks: usize) -> RangeInclusive<usize> {
    1..=max_take(sticks)
}

/// Check whether taking `take` sticks is allowed with `sticks` remaining
pub fn is_legal(sticks: usize, take: usize) -> bool {
    legal_moves(sticks).contains(&take)
}

/// Whether the side to move loses against perfect play.
///
/// The mover is lost exactly when `sticks ≡ 1 (mod MAX_TAKE + 1)`: every
/// reply can be answered so the opponent faces the same residue again, down
/// to the single last stick.
pub fn is_losing_position(sticks: usize) -> bool {
    sticks % (MAX_TAKE + 1) == 1
}

/// Takes that leave the opponent in a losing position.
///
/// When no such take exists every legal take is equally bad, so all of them
/// are returned.
pub fn optimal_moves(sticks: usize) -> Vec<usize> {
    let winning: Vec<usize> = legal_moves(sticks)
        .filter(|&take| is_losing_position(sticks - take))
        .collect();
    if winning.is_empty() {
        legal_moves(sticks).collect()
    } else {
        winning
    }
}
