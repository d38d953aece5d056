//! Randomness primitives.
//!
//! Every stochastic operation in the crate takes an explicit `&mut R: Rng`
//! handle, so a run is reproducible from its seed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns `true` or `false` with equal probability.
pub fn random_bit<R: Rng>(rng: &mut R) -> bool {
    rng.random_bool(0.5)
}

/// Returns a uniform integer in the half-open range `[min, max)`.
///
/// # Panics
/// Panics if `min >= max`.
pub fn random_in_range<R: Rng>(rng: &mut R, min: usize, max: usize) -> usize {
    assert!(min < max, "empty range [{min}, {max})");
    rng.random_range(min..max)
}

/// Bernoulli trial: `true` with probability `p`.
///
/// `p` is clamped to `[0, 1]`; NaN never fires.
pub fn chance<R: Rng>(rng: &mut R, p: f64) -> bool {
    if p.is_nan() || p <= 0.0 {
        false
    } else if p >= 1.0 {
        true
    } else {
        rng.random_bool(p)
    }
}
