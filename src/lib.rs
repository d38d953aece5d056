//! Genetic-algorithm solver for the 0/1 knapsack problem.
//!
//! Given a catalog of items (name, value, weight) and a weight capacity,
//! searches for the subset with the highest total value that fits.
//!
//! - [`knapsack`]: items, bitstring genomes, fitness evaluation
//! - [`ga`]: operators, weighted sampling, and the evolutionary loop
//! - [`random`]: seeded RNG and small random helpers
//!
//! # Example
//!
//! ```
//! use u_knapsack::ga::{Solver, SolverConfig};
//! use u_knapsack::knapsack::{Item, Knapsack};
//!
//! let knapsack = Knapsack::new(
//!     vec![
//!         Item::new("a", 10.0, 5.0),
//!         Item::new("b", 2.0, 1.0),
//!         Item::new("c", 3.0, 4.0),
//!         Item::new("d", 7.0, 4.0),
//!         Item::new("e", 4.0, 1.0),
//!     ],
//!     10.0,
//! )?;
//! let config = SolverConfig::minimal().with_seed(42).with_silent(true);
//! let result = Solver::new(knapsack, config)?.run()?;
//! assert!(result.weight <= 10.0);
//! # Ok::<(), u_knapsack::KnapsackError>(())
//! ```

pub mod error;
pub mod ga;
pub mod knapsack;
pub mod random;

pub use error::{KnapsackError, Result};
