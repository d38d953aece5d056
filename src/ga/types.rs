//! Operator traits for the knapsack GA.
//!
//! The solver is generic over one implementation of each trait. The
//! defaults are [`RouletteSelection`](super::RouletteSelection),
//! [`SinglePointCrossover`](super::SinglePointCrossover) and
//! [`BitFlipMutation`](super::BitFlipMutation); any of them can be swapped
//! at construction time.
//!
//! Operators receive genomes by reference and return new ones. They must
//! never hold on to or modify the population they were given.

use crate::error::Result;
use crate::knapsack::{Genome, Knapsack};
use rand::Rng;

/// Chooses two parents from the current population.
pub trait Selection {
    /// Returns two distinct parents (distinct by position in `population`).
    ///
    /// `knapsack` is provided so implementations can score genomes.
    /// The population holds at least two genomes.
    fn select_pair<R: Rng>(
        &self,
        population: &[Genome],
        knapsack: &Knapsack,
        rng: &mut R,
    ) -> Result<(Genome, Genome)>;
}

/// Recombines two parents into two offspring.
pub trait Crossover {
    /// # Errors
    /// Implementations must return
    /// [`KnapsackError::LengthMismatch`](crate::KnapsackError::LengthMismatch)
    /// when the parents differ in length.
    fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R) -> Result<(Genome, Genome)>;
}

/// Perturbs one offspring.
pub trait Mutation {
    /// Returns a mutated copy of `genome` of the same length.
    fn mutate<R: Rng>(&self, genome: &Genome, rng: &mut R) -> Genome;
}
