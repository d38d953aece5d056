//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! The solver evolves a population of bitstring [`Genome`](crate::knapsack::Genome)s.
//! Every generation it scores and sorts the population, stops if the
//! fitness target or generation limit is reached, copies the elites
//! forward, and fills the rest by selection, crossover, and mutation.
//!
//! # Operator Traits
//!
//! - [`Selection`]: choose two parents
//! - [`Crossover`]: recombine two parents into two offspring
//! - [`Mutation`]: perturb an offspring
//!
//! # Key Types
//!
//! - [`SolverConfig`]: Population size, generation limit, target, elitism
//! - [`Solver`]: Executes the evolutionary loop
//! - [`SolverResult`]: Best genome, its fitness, generations run
//! - [`GenerationStats`] / [`Reporter`]: per-generation reporting
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer Implementations*

mod config;
mod operators;
mod report;
mod runner;
mod sampling;
mod selection;
mod types;

pub use config::SolverConfig;
pub use operators::{
    bit_flip_mutation, single_point_crossover, BitFlipMutation, SinglePointCrossover,
};
pub use report::{GenerationStats, LogReporter, Reporter};
pub use runner::{Solver, SolverResult};
pub use sampling::{sample_indices, sample_without_replacement};
pub use selection::RouletteSelection;
pub use types::{Crossover, Mutation, Selection};
