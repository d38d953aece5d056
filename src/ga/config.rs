//! Solver configuration.
//!
//! [`SolverConfig`] holds all parameters that control the evolutionary loop.
//! Operator parameters (crossover and mutation probabilities) live on the
//! operators themselves.

use crate::error::{KnapsackError, Result};

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use u_knapsack::ga::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.population_size, 500);
/// assert_eq!(config.generation_limit, 100);
/// assert_eq!(config.elite_count, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::ga::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_population_size(200)
///     .with_generation_limit(50)
///     .with_max_fitness(9000.0)
///     .with_seed(42)
///     .with_silent(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Number of breeding steps before the run stops.
    pub generation_limit: usize,

    /// Number of genomes in every generation.
    pub population_size: usize,

    /// Stop as soon as the best genome reaches this fitness.
    ///
    /// `None` runs until `generation_limit`.
    pub max_fitness: Option<f64>,

    /// Number of top genomes copied unchanged into the next generation.
    ///
    /// With at least one elite, the best fitness never decreases from one
    /// generation to the next.
    pub elite_count: usize,

    /// Suppresses per-generation reporting.
    pub silent: bool,

    /// Whether to evaluate the population in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            generation_limit: 100,
            population_size: 500,
            max_fitness: None,
            elite_count: 2,
            silent: false,
            parallel: false,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Sets the generation limit.
    pub fn with_generation_limit(mut self, n: usize) -> Self {
        self.generation_limit = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the fitness target for early termination.
    pub fn with_max_fitness(mut self, target: f64) -> Self {
        self.max_fitness = Some(target);
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Enables or disables per-generation reporting.
    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset with a population of 10, for small catalogs and demos.
    pub fn minimal() -> Self {
        Self {
            population_size: 10,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`KnapsackError::InvalidConfig`] describing the first bad parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(KnapsackError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.generation_limit == 0 {
            return Err(KnapsackError::InvalidConfig(
                "generation_limit must be at least 1".into(),
            ));
        }
        if self.elite_count > self.population_size {
            return Err(KnapsackError::InvalidConfig(format!(
                "elite_count {} exceeds population_size {}",
                self.elite_count, self.population_size
            )));
        }
        if let Some(target) = self.max_fitness {
            if !target.is_finite() || target < 0.0 {
                return Err(KnapsackError::InvalidConfig(
                    "max_fitness must be finite and non-negative".into(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.generation_limit, 100);
        assert_eq!(config.population_size, 500);
        assert_eq!(config.max_fitness, None);
        assert_eq!(config.elite_count, 2);
        assert!(!config.silent);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SolverConfig::default()
            .with_generation_limit(10)
            .with_population_size(20)
            .with_max_fitness(150.0)
            .with_elite_count(4)
            .with_silent(true)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.generation_limit, 10);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_fitness, Some(150.0));
        assert_eq!(config.elite_count, 4);
        assert!(config.silent);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_minimal_preset() {
        let config = SolverConfig::minimal();
        assert_eq!(config.population_size, 10);
        assert_eq!(config.generation_limit, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_ok() {
        assert!(SolverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        let config = SolverConfig::default().with_population_size(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = SolverConfig::default().with_generation_limit(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_elites_exceed_population() {
        let config = SolverConfig::default()
            .with_population_size(4)
            .with_elite_count(5);
        assert!(config.validate().is_err());

        let config = SolverConfig::default()
            .with_population_size(4)
            .with_elite_count(4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_target() {
        assert!(SolverConfig::default()
            .with_max_fitness(f64::NAN)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_max_fitness(-1.0)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_max_fitness(0.0)
            .validate()
            .is_ok());
    }
}
