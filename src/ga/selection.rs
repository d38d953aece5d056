//! Fitness-proportionate parent selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::sampling::sample_indices;
use super::types::Selection;
use crate::error::Result;
use crate::knapsack::{Genome, Knapsack};
use rand::Rng;

/// Roulette-wheel selection of two distinct parents.
///
/// Each genome's weight is its fitness, plus a uniform draw from
/// `[0, jitter)` when `jitter > 0`. The jitter breaks exact ties and keeps
/// zero-fitness genomes selectable with a small probability.
///
/// ```
/// use u_knapsack::ga::RouletteSelection;
///
/// let sel = RouletteSelection::default();
/// assert_eq!(sel.jitter, 0.0);
///
/// let sel = RouletteSelection::with_jitter(1e-3);
/// assert_eq!(sel.jitter, 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouletteSelection {
    /// Upper bound of the random amount added to each weight.
    pub jitter: f64,
}

impl RouletteSelection {
    pub fn with_jitter(jitter: f64) -> Self {
        Self {
            jitter: if jitter.is_finite() { jitter.max(0.0) } else { 0.0 },
        }
    }
}

impl Selection for RouletteSelection {
    fn select_pair<R: Rng>(
        &self,
        population: &[Genome],
        knapsack: &Knapsack,
        rng: &mut R,
    ) -> Result<(Genome, Genome)> {
        let mut weights = Vec::with_capacity(population.len());
        for genome in population {
            let mut w = knapsack.fitness(genome)?;
            if self.jitter > 0.0 {
                w += rng.random_range(0.0..self.jitter);
            }
            weights.push(w);
        }

        let drawn = sample_indices(&weights, 2, rng)?;
        Ok((population[drawn[0]].clone(), population[drawn[1]].clone()))
    }
}
