//! Bitstring crossover and mutation operators.
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`]: splice two sequences at one point; generic
//!   over the element type
//! - [`SinglePointCrossover`]: the same, as a [`Crossover`] for genomes
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: complement randomly chosen genes
//! - [`BitFlipMutation`]: the same, as a [`Mutation`]
//!
//! In every operator the configured probability is the chance that the
//! event (crossover, flip) happens.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::types::{Crossover, Mutation};
use crate::error::{KnapsackError, Result};
use crate::knapsack::Genome;
use crate::random::{chance, random_in_range};
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// With probability `probability`, splits both parents at `point` (or at a
/// uniform point in `[1, len)` when `point` is `None`) and returns
/// `a[..point] ++ b[point..]` and `b[..point] ++ a[point..]`. Otherwise, or
/// when the parents have a single element, returns copies of the parents.
///
/// Point 0 is never drawn: it would just swap the parents.
///
/// # Errors
/// - [`KnapsackError::LengthMismatch`] if the parents differ in length
/// - [`KnapsackError::InvalidCrossoverPoint`] if `point` is outside `[1, len)`
///
/// ```
/// use u_knapsack::ga::single_point_crossover;
/// use u_knapsack::random::create_rng;
///
/// let a: Vec<char> = "aaaaaa".chars().collect();
/// let b: Vec<char> = "bbbbbb".chars().collect();
/// let mut rng = create_rng(0);
/// let (x, y) = single_point_crossover(&a, &b, 1.0, Some(3), &mut rng).unwrap();
/// assert_eq!(x.iter().collect::<String>(), "aaabbb");
/// assert_eq!(y.iter().collect::<String>(), "bbbaaa");
/// ```
///
/// # Complexity
/// O(n)
pub fn single_point_crossover<T: Clone, R: Rng>(
    a: &[T],
    b: &[T],
    probability: f64,
    point: Option<usize>,
    rng: &mut R,
) -> Result<(Vec<T>, Vec<T>)> {
    let n = a.len();
    if n != b.len() {
        return Err(KnapsackError::LengthMismatch {
            expected: n,
            actual: b.len(),
        });
    }

    if n <= 1 || !chance(rng, probability) {
        return Ok((a.to_vec(), b.to_vec()));
    }

    let point = match point {
        Some(p) if p == 0 || p >= n => {
            return Err(KnapsackError::InvalidCrossoverPoint { point: p, len: n })
        }
        Some(p) => p,
        None => random_in_range(rng, 1, n),
    };

    let mut child_a = Vec::with_capacity(n);
    child_a.extend_from_slice(&a[..point]);
    child_a.extend_from_slice(&b[point..]);

    let mut child_b = Vec::with_capacity(n);
    child_b.extend_from_slice(&b[..point]);
    child_b.extend_from_slice(&a[point..]);

    Ok((child_a, child_b))
}

/// [`single_point_crossover`] on genomes.
///
/// `point` fixes the split point; leave it `None` for a random point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SinglePointCrossover {
    /// Probability that the parents are recombined at all.
    pub probability: f64,

    /// Fixed split point, mainly for tests.
    pub point: Option<usize>,
}

impl Default for SinglePointCrossover {
    fn default() -> Self {
        Self {
            probability: 0.5,
            point: None,
        }
    }
}

impl SinglePointCrossover {
    pub fn new(probability: f64) -> Self {
        Self {
            probability: clamp_probability(probability),
            point: None,
        }
    }

    /// Always crosses over, at `point`.
    pub fn at_point(point: usize) -> Self {
        Self {
            probability: 1.0,
            point: Some(point),
        }
    }
}

impl Crossover for SinglePointCrossover {
    fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R) -> Result<(Genome, Genome)> {
        let (x, y) =
            single_point_crossover(a.genes(), b.genes(), self.probability, self.point, rng)?;
        Ok((Genome::new(x), Genome::new(y)))
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Bit-flip mutation.
///
/// Runs `iterations` independent trials. Each trial, with probability
/// `probability`, complements one uniformly chosen gene. The same gene may
/// be picked twice, undoing the first flip. Returns a new genome; `genome`
/// is untouched.
///
/// # Complexity
/// O(n + iterations)
pub fn bit_flip_mutation<R: Rng>(
    genome: &Genome,
    probability: f64,
    iterations: usize,
    rng: &mut R,
) -> Genome {
    let mut mutated = genome.clone();
    if mutated.is_empty() {
        return mutated;
    }

    for _ in 0..iterations {
        if !chance(rng, probability) {
            continue;
        }
        let idx = random_in_range(rng, 0, mutated.len());
        mutated = mutated.with_flipped(idx);
    }

    mutated
}

/// [`bit_flip_mutation`] as a [`Mutation`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitFlipMutation {
    /// Probability that a trial flips a gene.
    pub probability: f64,

    /// Number of independent trials per genome.
    pub iterations: usize,
}

impl Default for BitFlipMutation {
    fn default() -> Self {
        Self {
            probability: 0.5,
            iterations: 1,
        }
    }
}

impl BitFlipMutation {
    pub fn new(probability: f64, iterations: usize) -> Self {
        Self {
            probability: clamp_probability(probability),
            iterations,
        }
    }
}

impl Mutation for BitFlipMutation {
    fn mutate<R: Rng>(&self, genome: &Genome, rng: &mut R) -> Genome {
        bit_flip_mutation(genome, self.probability, self.iterations, rng)
    }
}

/// Clamps to `[0, 1]`, mapping NaN to 0.
fn clamp_probability(p: f64) -> f64 {
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
