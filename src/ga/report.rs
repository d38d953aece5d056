//! Per-generation statistics and the reporting sink.
//!
//! Reporting is write-only: nothing a [`Reporter`] does feeds back into
//! the search.

use crate::knapsack::{FitnessResult, Genome};

/// Snapshot of one evaluated generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// Generation index, starting at 0 for the initial population.
    pub generation: usize,

    /// Fittest genome of the generation.
    pub best: Genome,
    pub best_result: FitnessResult,

    /// Least fit genome of the generation.
    pub worst: Genome,
    pub worst_result: FitnessResult,

    /// Mean fitness over the whole population.
    pub average_fitness: f64,
}

/// Receives generation statistics from the solver.
///
/// Not called when the configuration is `silent`.
pub trait Reporter {
    fn on_generation(&self, stats: &GenerationStats);
}

/// Reports through the `log` facade.
///
/// One `info` line per generation; the best and worst bitstrings go to
/// `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn on_generation(&self, stats: &GenerationStats) {
        log::info!(
            "generation {}: best {} (weight {}), worst {} (weight {}), avg {:.3}",
            stats.generation,
            stats.best_result.fitness,
            stats.best_result.weight,
            stats.worst_result.fitness,
            stats.worst_result.weight,
            stats.average_fitness,
        );
        log::debug!(
            "generation {}: best {} / worst {}",
            stats.generation,
            stats.best,
            stats.worst
        );
    }
}

impl<F: Fn(&GenerationStats)> Reporter for F {
    fn on_generation(&self, stats: &GenerationStats) {
        self(stats)
    }
}
