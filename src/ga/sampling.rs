//! Weighted sampling without replacement.
//!
//! Each draw is a roulette-wheel spin over the weights still in the pool;
//! the drawn candidate and its weight are then removed, so the next spin
//! is renormalized over what remains.
//!
//! # References
//!
//! - Wong & Easton (1980), "An Efficient Method for Weighted Sampling
//!   without Replacement"

use crate::error::{KnapsackError, Result};
use rand::Rng;

/// Draws `k` distinct indices in `0..weights.len()`, proportionally to
/// `weights`, without replacement.
///
/// When every remaining weight is zero the draw falls back to uniform,
/// so a population with no feasible genome can still breed.
///
/// # Errors
/// - [`KnapsackError::InvalidSampleSize`] if `k > weights.len()`
/// - [`KnapsackError::InvalidWeight`] if a weight is negative or not finite
///
/// # Complexity
/// O(k·n)
pub fn sample_indices<R: Rng>(weights: &[f64], k: usize, rng: &mut R) -> Result<Vec<usize>> {
    let n = weights.len();
    if k > n {
        return Err(KnapsackError::InvalidSampleSize {
            requested: k,
            available: n,
        });
    }
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() || weight < 0.0 {
            return Err(KnapsackError::InvalidWeight { index, weight });
        }
    }

    let mut pool: Vec<usize> = (0..n).collect();
    let mut pool_weights: Vec<f64> = weights.to_vec();
    let mut drawn = Vec::with_capacity(k);

    for _ in 0..k {
        let slot = spin(&pool_weights, rng);
        drawn.push(pool.swap_remove(slot));
        pool_weights.swap_remove(slot);
    }

    Ok(drawn)
}

/// Draws `k` distinct elements of `items`, proportionally to `weights`.
///
/// Distinctness is positional: two equal elements at different indices
/// may both be returned.
///
/// # Errors
/// - [`KnapsackError::LengthMismatch`] if `items` and `weights` differ in length
/// - everything [`sample_indices`] reports
///
/// ```
/// use u_knapsack::ga::sample_without_replacement;
/// use u_knapsack::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let picked =
///     sample_without_replacement(&["a", "b", "c"], &[1.0, 0.0, 3.0], 2, &mut rng).unwrap();
/// assert_eq!(picked.len(), 2);
/// assert!(!picked.contains(&"b"));
/// ```
pub fn sample_without_replacement<T: Clone, R: Rng>(
    items: &[T],
    weights: &[f64],
    k: usize,
    rng: &mut R,
) -> Result<Vec<T>> {
    if items.len() != weights.len() {
        return Err(KnapsackError::LengthMismatch {
            expected: items.len(),
            actual: weights.len(),
        });
    }
    let indices = sample_indices(weights, k, rng)?;
    Ok(indices.into_iter().map(|i| items[i].clone()).collect())
}

/// One roulette spin over `weights`, returning a slot index.
///
/// Weights must be finite, non-negative, and `weights` non-empty.
fn spin<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let n = weights.len();
    let mut total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return rng.random_range(0..n);
    }

    // finite weights can still overflow when summed
    let mut scale = 1.0;
    if !total.is_finite() {
        scale = weights.iter().copied().fold(0.0, f64::max);
        total = weights.iter().map(|&w| w / scale).sum();
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w / scale;
        if cumulative > threshold {
            return i;
        }
    }

    // floating-point fallback: last slot with non-zero weight
    weights.iter().rposition(|&w| w > 0.0).unwrap_or(n - 1)
}
