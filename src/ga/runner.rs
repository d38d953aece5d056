//! Knapsack GA evolutionary loop.
//!
//! [`Solver`] orchestrates the complete evolutionary process:
//! initialization → evaluation → termination check → elitism →
//! selection → crossover → mutation → evaluation → ...

use super::config::SolverConfig;
use super::operators::{BitFlipMutation, SinglePointCrossover};
use super::report::{GenerationStats, LogReporter, Reporter};
use super::selection::RouletteSelection;
use super::types::{Crossover, Mutation, Selection};
use crate::error::Result;
use crate::knapsack::{generate_population, FitnessResult, Genome, Knapsack};
use crate::random::create_rng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of a solver run.
#[derive(Debug, Clone, PartialEq)]
pub struct SolverResult {
    /// The fittest genome of the final generation.
    pub best_genome: Genome,

    /// Fitness of `best_genome`.
    pub fitness: f64,

    /// Packed weight of `best_genome`.
    pub weight: f64,

    /// Number of breeding steps performed.
    pub number_of_generations: usize,

    /// Whether the run stopped because `max_fitness` was reached.
    pub reached_target: bool,

    /// Best fitness of each evaluated generation, starting with the
    /// initial population.
    pub fitness_history: Vec<f64>,
}

/// A genome together with its score.
#[derive(Debug, Clone)]
struct Scored {
    genome: Genome,
    result: FitnessResult,
}

/// Genetic-algorithm solver for one knapsack instance.
///
/// Generic over its operators; the defaults are [`RouletteSelection`],
/// [`SinglePointCrossover`], [`BitFlipMutation`] and [`LogReporter`].
///
/// # Usage
///
/// ```
/// use u_knapsack::ga::{Solver, SolverConfig};
/// use u_knapsack::knapsack::{Item, Knapsack};
///
/// let knapsack = Knapsack::new(
///     vec![
///         Item::new("Laptop", 500.0, 2200.0),
///         Item::new("Headphones", 150.0, 160.0),
///         Item::new("Phone", 500.0, 200.0),
///         Item::new("Baseball Cap", 100.0, 70.0),
///     ],
///     1000.0,
/// )
/// .unwrap();
/// let config = SolverConfig::minimal().with_generation_limit(20).with_seed(42).with_silent(true);
/// let result = Solver::new(knapsack, config).unwrap().run().unwrap();
/// assert!(result.fitness <= 750.0);
/// ```
#[derive(Debug, Clone)]
pub struct Solver<
    S = RouletteSelection,
    C = SinglePointCrossover,
    M = BitFlipMutation,
    Rep = LogReporter,
> {
    knapsack: Knapsack,
    config: SolverConfig,
    selection: S,
    crossover: C,
    mutation: M,
    reporter: Rep,
}

impl Solver {
    /// Creates a solver with the default operators.
    ///
    /// # Errors
    /// [`KnapsackError::InvalidConfig`](crate::KnapsackError::InvalidConfig)
    /// if `config` fails [`SolverConfig::validate`].
    pub fn new(knapsack: Knapsack, config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            knapsack,
            config,
            selection: RouletteSelection::default(),
            crossover: SinglePointCrossover::default(),
            mutation: BitFlipMutation::default(),
            reporter: LogReporter,
        })
    }
}

impl<S, C, M, Rep> Solver<S, C, M, Rep> {
    /// Replaces the selection operator.
    pub fn with_selection<S2: Selection>(self, selection: S2) -> Solver<S2, C, M, Rep> {
        Solver {
            knapsack: self.knapsack,
            config: self.config,
            selection,
            crossover: self.crossover,
            mutation: self.mutation,
            reporter: self.reporter,
        }
    }

    /// Replaces the crossover operator.
    pub fn with_crossover<C2: Crossover>(self, crossover: C2) -> Solver<S, C2, M, Rep> {
        Solver {
            knapsack: self.knapsack,
            config: self.config,
            selection: self.selection,
            crossover,
            mutation: self.mutation,
            reporter: self.reporter,
        }
    }

    /// Replaces the mutation operator.
    pub fn with_mutation<M2: Mutation>(self, mutation: M2) -> Solver<S, C, M2, Rep> {
        Solver {
            knapsack: self.knapsack,
            config: self.config,
            selection: self.selection,
            crossover: self.crossover,
            mutation,
            reporter: self.reporter,
        }
    }

    /// Replaces the reporting sink.
    pub fn with_reporter<Rep2: Reporter>(self, reporter: Rep2) -> Solver<S, C, M, Rep2> {
        Solver {
            knapsack: self.knapsack,
            config: self.config,
            selection: self.selection,
            crossover: self.crossover,
            mutation: self.mutation,
            reporter,
        }
    }
}

impl<S, C, M, Rep> Solver<S, C, M, Rep>
where
    S: Selection,
    C: Crossover,
    M: Mutation,
    Rep: Reporter,
{
    /// Runs the GA.
    ///
    /// Stops when the best genome of a generation reaches
    /// `config.max_fitness`, or after `config.generation_limit` breeding
    /// steps. Genomes with equal fitness are ordered arbitrarily, so which
    /// of several equally fit genomes is returned is unspecified.
    ///
    /// # Errors
    /// Propagates any error raised by evaluation or the operators.
    pub fn run(&self) -> Result<SolverResult> {
        let mut rng = match self.config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        log::debug!(
            "starting knapsack GA: {} items, capacity {}, population {}, generation limit {}",
            self.knapsack.len(),
            self.knapsack.capacity(),
            self.config.population_size,
            self.config.generation_limit
        );

        let mut population =
            generate_population(self.config.population_size, self.knapsack.len(), &mut rng);
        let mut fitness_history = Vec::with_capacity(self.config.generation_limit + 1);
        let mut generation = 0usize;

        loop {
            let scored = self.evaluate_sorted(population)?;
            let best = &scored[0];
            fitness_history.push(best.result.fitness);

            if !self.config.silent {
                self.reporter.on_generation(&generation_stats(generation, &scored));
            }

            let reached_target = self
                .config
                .max_fitness
                .is_some_and(|target| best.result.fitness >= target);

            if reached_target || generation >= self.config.generation_limit {
                if best.result.is_overweight(self.knapsack.capacity()) {
                    log::warn!(
                        "best genome exceeds capacity {}",
                        self.knapsack.capacity()
                    );
                }
                log::debug!(
                    "stopping after {} generations (target reached: {}), best fitness {}",
                    generation,
                    reached_target,
                    best.result.fitness
                );
                return Ok(SolverResult {
                    best_genome: best.genome.clone(),
                    fitness: best.result.fitness,
                    weight: best.result.weight,
                    number_of_generations: generation,
                    reached_target,
                    fitness_history,
                });
            }

            let sorted: Vec<Genome> = scored.into_iter().map(|s| s.genome).collect();
            population = self.breed(&sorted, &mut rng)?;
            generation += 1;
        }
    }

    /// Builds the next generation from a population sorted best-first.
    fn breed<R: Rng>(&self, sorted: &[Genome], rng: &mut R) -> Result<Vec<Genome>> {
        let size = self.config.population_size;
        let mut next_gen: Vec<Genome> = Vec::with_capacity(size + 1);
        next_gen.extend(sorted.iter().take(self.config.elite_count).cloned());

        while next_gen.len() < size {
            let (parent_a, parent_b) = self.selection.select_pair(sorted, &self.knapsack, rng)?;
            let (child_a, child_b) = self.crossover.crossover(&parent_a, &parent_b, rng)?;
            next_gen.push(self.mutation.mutate(&child_a, rng));
            next_gen.push(self.mutation.mutate(&child_b, rng));
        }

        // the last pair may overshoot by one
        next_gen.truncate(size);
        Ok(next_gen)
    }

    /// Scores every genome and sorts by fitness, best first.
    fn evaluate_sorted(&self, population: Vec<Genome>) -> Result<Vec<Scored>> {
        let mut scored = evaluate_population(&self.knapsack, population, self.config.parallel)?;
        scored.sort_by(|a, b| b.result.fitness.total_cmp(&a.result.fitness));
        Ok(scored)
    }
}

/// Evaluate all genomes in the population.
#[cfg_attr(not(feature = "parallel"), allow(unused_variables))]
fn evaluate_population(
    knapsack: &Knapsack,
    population: Vec<Genome>,
    parallel: bool,
) -> Result<Vec<Scored>> {
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return population
                .into_par_iter()
                .map(|genome| score(knapsack, genome))
                .collect();
        }
    }

    population
        .into_iter()
        .map(|genome| score(knapsack, genome))
        .collect()
}

fn score(knapsack: &Knapsack, genome: Genome) -> Result<Scored> {
    let result = knapsack.evaluate(&genome)?;
    Ok(Scored { genome, result })
}

/// Statistics of a population sorted best-first.
fn generation_stats(generation: usize, scored: &[Scored]) -> GenerationStats {
    let best = &scored[0];
    let worst = &scored[scored.len() - 1];
    let total: f64 = scored.iter().map(|s| s.result.fitness).sum();
    GenerationStats {
        generation,
        best: best.genome.clone(),
        best_result: best.result,
        worst: worst.genome.clone(),
        worst_result: worst.result,
        average_fitness: total / scored.len() as f64,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnapsackError;
    use crate::knapsack::Item;
    use std::cell::RefCell;

    fn catalog() -> Vec<Item> {
        vec![
            Item::new("Laptop", 500.0, 2200.0),
            Item::new("Headphones", 150.0, 160.0),
            Item::new("Coffee Mug", 60.0, 350.0),
            Item::new("Notepad", 40.0, 333.0),
            Item::new("Water Bottle", 200.0, 192.0),
            Item::new("Mints", 5.0, 25.0),
            Item::new("Socks", 10.0, 38.0),
            Item::new("Tissues", 15.0, 80.0),
            Item::new("Phone", 500.0, 200.0),
            Item::new("Baseball Cap", 100.0, 70.0),
            Item::new("Car keys", 800.0, 50.0),
            Item::new("Book", 80.0, 400.0),
            Item::new("Charges", 200.0, 100.0),
            Item::new("Candy", 40.0, 10.0),
            Item::new("Bus card", 350.0, 20.0),
            Item::new("Glasses", 1000.0, 300.0),
            Item::new("Pen", 200.0, 75.0),
            Item::new("CD", 100.0, 100.0),
            Item::new("Pet toy", 150.0, 150.0),
        ]
    }

    fn knapsack() -> Knapsack {
        Knapsack::new(catalog(), 1000.0).unwrap()
    }

    fn config() -> SolverConfig {
        SolverConfig::default()
            .with_population_size(50)
            .with_generation_limit(60)
            .with_seed(42)
            .with_silent(true)
    }

    #[test]
    fn test_finds_feasible_good_solution() {
        let ks = knapsack();
        let result = Solver::new(ks.clone(), config()).unwrap().run().unwrap();

        assert!(result.weight <= ks.capacity());
        assert_eq!(ks.evaluate(&result.best_genome).unwrap().fitness, result.fitness);
        assert!(
            result.fitness >= 3000.0,
            "expected fitness >= 3000 on the 19-item catalog, got {}",
            result.fitness
        );
    }

    #[test]
    fn test_runs_full_generation_limit_without_target() {
        let result = Solver::new(knapsack(), config()).unwrap().run().unwrap();
        assert_eq!(result.number_of_generations, 60);
        assert!(!result.reached_target);
        // initial generation + one per breeding step
        assert_eq!(result.fitness_history.len(), 61);
    }

    #[test]
    fn test_elitism_monotonic() {
        let result = Solver::new(knapsack(), config()).unwrap().run().unwrap();
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness should never decrease with elitism: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_stops_at_target() {
        let config = config().with_generation_limit(500).with_max_fitness(3000.0);
        let result = Solver::new(knapsack(), config).unwrap().run().unwrap();
        assert!(result.reached_target);
        assert!(result.fitness >= 3000.0);
        assert!(result.number_of_generations < 500);
        assert_eq!(
            result.fitness_history.len(),
            result.number_of_generations + 1
        );
    }

    #[test]
    fn test_zero_target_stops_immediately() {
        let config = config().with_max_fitness(0.0);
        let result = Solver::new(knapsack(), config).unwrap().run().unwrap();
        assert!(result.reached_target);
        assert_eq!(result.number_of_generations, 0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = Solver::new(knapsack(), config()).unwrap().run().unwrap();
        let b = Solver::new(knapsack(), config()).unwrap().run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Solver::new(knapsack(), config().with_population_size(1)).unwrap_err();
        assert!(matches!(err, KnapsackError::InvalidConfig(_)));
    }

    #[test]
    fn test_odd_population_size_is_exact() {
        let ks = knapsack();
        let solver = Solver::new(ks, config().with_population_size(7)).unwrap();
        let mut rng = create_rng(1);
        let population = generate_population(7, 19, &mut rng);
        let next = solver.breed(&population, &mut rng).unwrap();
        assert_eq!(next.len(), 7);
        assert!(next.iter().all(|g| g.len() == 19));
    }

    #[test]
    fn test_elites_carried_unchanged() {
        let solver = Solver::new(knapsack(), config().with_population_size(10)).unwrap();
        let mut rng = create_rng(3);
        let population = generate_population(10, 19, &mut rng);
        let sorted: Vec<Genome> = solver
            .evaluate_sorted(population)
            .unwrap()
            .into_iter()
            .map(|s| s.genome)
            .collect();
        let next = solver.breed(&sorted, &mut rng).unwrap();
        assert_eq!(next[0], sorted[0]);
        assert_eq!(next[1], sorted[1]);
    }

    #[test]
    fn test_sorted_descending() {
        let solver = Solver::new(knapsack(), config()).unwrap();
        let mut rng = create_rng(5);
        let scored = solver
            .evaluate_sorted(generate_population(30, 19, &mut rng))
            .unwrap();
        for window in scored.windows(2) {
            assert!(window[0].result.fitness >= window[1].result.fitness);
        }
    }

    #[test]
    fn test_single_item_catalog() {
        let ks = Knapsack::new(vec![Item::new("only", 3.0, 1.0)], 2.0).unwrap();
        let config = SolverConfig::minimal()
            .with_generation_limit(10)
            .with_seed(1)
            .with_silent(true);
        let result = Solver::new(ks, config).unwrap().run().unwrap();
        assert_eq!(result.best_genome.len(), 1);
        assert_eq!(result.fitness, 3.0);
    }

    #[test]
    fn test_nothing_fits() {
        let ks = Knapsack::new(
            vec![Item::new("anvil", 10.0, 100.0), Item::new("piano", 50.0, 500.0)],
            1.0,
        )
        .unwrap();
        let config = SolverConfig::minimal()
            .with_generation_limit(5)
            .with_seed(1)
            .with_silent(true);
        let result = Solver::new(ks, config).unwrap().run().unwrap();
        assert_eq!(result.fitness, 0.0);
    }

    #[test]
    fn test_huge_values_still_search() {
        // population fitness sums overflow f64 even though each genome's does not
        let big = f64::MAX / 4.0;
        let ks = Knapsack::new(
            vec![
                Item::new("a", big, 1.0),
                Item::new("b", big, 1.0),
                Item::new("c", big, 1.0),
            ],
            10.0,
        )
        .unwrap();
        let config = SolverConfig::minimal()
            .with_generation_limit(10)
            .with_seed(3)
            .with_silent(true);
        let result = Solver::new(ks, config).unwrap().run().unwrap();
        assert!(result.fitness.is_finite());
        assert!(result.fitness >= big);
        assert_eq!(result.number_of_generations, 10);
    }

    #[test]
    fn test_reporter_called_once_per_generation() {
        let seen = RefCell::new(Vec::new());
        let reporter = |stats: &GenerationStats| {
            seen.borrow_mut().push((
                stats.generation,
                stats.best_result.fitness,
                stats.average_fitness,
            ));
        };
        let config = config().with_generation_limit(5).with_silent(false);
        let result = Solver::new(knapsack(), config)
            .unwrap()
            .with_reporter(reporter)
            .run()
            .unwrap();

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 6);
        for (i, (generation, best, avg)) in seen.iter().enumerate() {
            assert_eq!(*generation, i);
            assert_eq!(*best, result.fitness_history[i]);
            assert!(avg <= best);
        }
    }

    #[test]
    fn test_silent_suppresses_reporter() {
        let calls = RefCell::new(0);
        let reporter = |_: &GenerationStats| *calls.borrow_mut() += 1;
        Solver::new(knapsack(), config().with_generation_limit(3))
            .unwrap()
            .with_reporter(reporter)
            .run()
            .unwrap();
        assert_eq!(calls.into_inner(), 0);
    }

    // ---- Custom operators ----

    /// Always picks the two fittest genomes.
    struct TopTwo;

    impl Selection for TopTwo {
        fn select_pair<R: Rng>(
            &self,
            population: &[Genome],
            _knapsack: &Knapsack,
            _rng: &mut R,
        ) -> Result<(Genome, Genome)> {
            Ok((population[0].clone(), population[1].clone()))
        }
    }

    struct NoCrossover;

    impl Crossover for NoCrossover {
        fn crossover<R: Rng>(
            &self,
            a: &Genome,
            b: &Genome,
            _rng: &mut R,
        ) -> Result<(Genome, Genome)> {
            Ok((a.clone(), b.clone()))
        }
    }

    struct FailingCrossover;

    impl Crossover for FailingCrossover {
        fn crossover<R: Rng>(
            &self,
            a: &Genome,
            _b: &Genome,
            _rng: &mut R,
        ) -> Result<(Genome, Genome)> {
            Err(KnapsackError::LengthMismatch {
                expected: a.len(),
                actual: 0,
            })
        }
    }

    #[test]
    fn test_custom_operators() {
        let result = Solver::new(knapsack(), config())
            .unwrap()
            .with_selection(TopTwo)
            .with_crossover(NoCrossover)
            .with_mutation(BitFlipMutation::new(1.0, 2))
            .run()
            .unwrap();
        assert!(result.weight <= 1000.0);
        for window in result.fitness_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
    }

    #[test]
    fn test_operator_error_propagates() {
        let err = Solver::new(knapsack(), config())
            .unwrap()
            .with_crossover(FailingCrossover)
            .run()
            .unwrap_err();
        assert!(matches!(err, KnapsackError::LengthMismatch { .. }));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = Solver::new(knapsack(), config()).unwrap().run().unwrap();
        let parallel = Solver::new(knapsack(), config().with_parallel(true))
            .unwrap()
            .run()
            .unwrap();
        assert_eq!(sequential, parallel);
    }
}
