//! Utility functions for the sticks crate

use rand::Rng;

/// Calculate Shannon entropy from a probability distribution.
///
/// The Shannon entropy is calculated as: H = -Σ(p * ln(p)) for p > 0
///
/// # Examples
///
/// ```
/// use sticks::utils::shannon_entropy;
///
/// let entropy = shannon_entropy(vec![0.5, 0.5]);
/// assert!((entropy - std::f64::consts::LN_2).abs() < 0.001);
/// ```
pub fn shannon_entropy<I>(probabilities: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    probabilities
        .into_iter()
        .filter(|&p| p > 0.0)
        .map(|p| -p * p.ln())
        .sum()
}

/// Calculate entropy from ball counts (normalizes first).
///
/// Returns 0.0 when every count is zero.
pub fn entropy_from_counts<I>(counts: I) -> f64
where
    I: IntoIterator<Item = u32>,
{
    let counts: Vec<f64> = counts.into_iter().map(f64::from).collect();
    let total: f64 = counts.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    shannon_entropy(counts.into_iter().map(|c| c / total))
}

/// Performs weighted random sampling over integer weights.
///
/// Each item is picked with probability `weight / total`, which is exactly
/// drawing one ball uniformly from a hat holding `weight` copies of each item.
///
/// # Returns
///
/// - `Some(item)` if sampling succeeds
/// - `None` if the slice is empty or every weight is zero
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use sticks::utils::weighted_sample;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let items = vec![(1, 2), (2, 0), (3, 1)];
/// let sampled = weighted_sample(&mut rng, &items).unwrap();
/// assert_ne!(sampled, 2);
/// ```
pub fn weighted_sample<R, T>(rng: &mut R, items: &[(T, u32)]) -> Option<T>
where
    R: Rng + ?Sized,
    T: Clone,
{
    let total: u64 = items.iter().map(|(_, w)| u64::from(*w)).sum();
    if total == 0 {
        return None;
    }

    let mut threshold = rng.random_range(0..total);
    for (item, weight) in items {
        let w = u64::from(*weight);
        if threshold < w {
            return Some(item.clone());
        }
        threshold -= w;
    }

    // threshold < total guarantees a hit above
    None
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_weighted_sample_empty() {
        let mut rng = StdRng::seed_from_u64(42);
        let items: Vec<(usize, u32)> = vec![];
        assert_eq!(weighted_sample(&mut rng, &items), None);
    }

    #[test]
    fn test_weighted_sample_all_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![(1usize, 0u32), (2, 0)];
        assert_eq!(weighted_sample(&mut rng, &items), None);
    }

    #[test]
    fn test_weighted_sample_skips_zero_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = vec![(1usize, 0u32), (2, 5), (3, 0)];
        for _ in 0..200 {
            assert_eq!(weighted_sample(&mut rng, &items), Some(2));
        }
    }

    #[test]
    fn test_weighted_sample_is_proportional() {
        let mut rng = StdRng::seed_from_u64(11);
        let items = vec![("heavy", 3u32), ("light", 1)];
        let heavy = (0..4000)
            .filter(|_| weighted_sample(&mut rng, &items) == Some("heavy"))
            .count();
        // Expect ~3000
        assert!((2700..3300).contains(&heavy), "heavy drawn {heavy} times");
    }

    #[test]
    fn test_entropy_from_counts() {
        assert_eq!(entropy_from_counts([0, 0, 0]), 0.0);
        assert!(entropy_from_counts([4, 0, 0]).abs() < 1e-12);
        let uniform = entropy_from_counts([1, 1, 1]);
        assert!((uniform - 3f64.ln()).abs() < 1e-12);
    }
}
