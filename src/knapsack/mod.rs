//! The 0/1 knapsack problem.
//!
//! - [`Item`]: a catalog entry (name, value, weight)
//! - [`Genome`]: one bit per catalog item, `1` meaning "packed"
//! - [`Knapsack`]: validated catalog plus capacity, with fitness evaluation
//!
//! Fitness is the total value of the packed items, or exactly zero when
//! their total weight exceeds the capacity.

mod fitness;
mod types;

pub use fitness::{evaluate, FitnessResult, Knapsack};
pub use types::{generate_population, Gene, Genome, Item};
