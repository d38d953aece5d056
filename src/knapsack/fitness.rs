//! Fitness evaluation for the 0/1 knapsack problem.

use super::types::{Genome, Item};
use crate::error::{KnapsackError, Result};

/// Score of one genome.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitnessResult {
    /// Total value of packed items, or exactly `0.0` if over capacity.
    pub fitness: f64,

    /// Total packed weight.
    ///
    /// When the genome overshoots the capacity this is the weight
    /// accumulated up to and including the first item that broke the limit,
    /// not the weight of the whole subset.
    pub weight: f64,
}

impl FitnessResult {
    /// Whether the genome was cut off for exceeding capacity.
    pub fn is_overweight(&self, capacity: f64) -> bool {
        self.weight > capacity
    }
}

/// Scores `genome` against `items` under `capacity`.
///
/// Any genome whose packed weight exceeds `capacity` scores `0.0`,
/// regardless of how much value it had accumulated.
///
/// # Errors
/// [`KnapsackError::LengthMismatch`] if the genome and catalog differ in length.
///
/// ```
/// use u_knapsack::knapsack::{evaluate, Genome, Item};
///
/// let items = vec![
///     Item::new("a", 10.0, 5.0),
///     Item::new("b", 2.0, 1.0),
///     Item::new("c", 3.0, 4.0),
///     Item::new("d", 7.0, 4.0),
///     Item::new("e", 4.0, 1.0),
/// ];
/// let result = evaluate(&items, 10.0, &Genome::from_bits(&[1, 0, 0, 1, 1])).unwrap();
/// assert_eq!(result.fitness, 21.0);
/// assert_eq!(result.weight, 10.0);
/// ```
pub fn evaluate(items: &[Item], capacity: f64, genome: &Genome) -> Result<FitnessResult> {
    if genome.len() != items.len() {
        return Err(KnapsackError::LengthMismatch {
            expected: items.len(),
            actual: genome.len(),
        });
    }

    let mut value = 0.0;
    let mut weight = 0.0;

    for index in genome.included_indices() {
        let item = &items[index];
        value += item.value;
        weight += item.weight;

        if weight > capacity {
            return Ok(FitnessResult {
                fitness: 0.0,
                weight,
            });
        }
    }

    Ok(FitnessResult {
        fitness: value,
        weight,
    })
}

/// A validated item catalog together with its weight capacity.
///
/// The catalog and capacity are fixed for the lifetime of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct Knapsack {
    items: Vec<Item>,
    capacity: f64,
}

impl Knapsack {
    /// Creates a knapsack problem.
    ///
    /// # Errors
    /// [`KnapsackError::InvalidItem`] if any value or weight is negative or
    /// not finite, or if the capacity is. A bad capacity is reported with
    /// `index == items.len()`. Catalogs whose total value or total weight
    /// overflows to infinity are rejected at the first item that overflows.
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self> {
        let mut total_value = 0.0;
        let mut total_weight = 0.0;
        for (index, item) in items.iter().enumerate() {
            if !item.value.is_finite() || item.value < 0.0 {
                return Err(KnapsackError::InvalidItem {
                    index,
                    reason: format!("value of '{}' must be finite and non-negative", item.name),
                });
            }
            if !item.weight.is_finite() || item.weight < 0.0 {
                return Err(KnapsackError::InvalidItem {
                    index,
                    reason: format!("weight of '{}' must be finite and non-negative", item.name),
                });
            }
            total_value += item.value;
            total_weight += item.weight;
            if !total_value.is_finite() || !total_weight.is_finite() {
                return Err(KnapsackError::InvalidItem {
                    index,
                    reason: format!("catalog totals overflow at '{}'", item.name),
                });
            }
        }
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(KnapsackError::InvalidItem {
                index: items.len(),
                reason: format!("capacity {capacity} must be finite and non-negative"),
            });
        }
        Ok(Self { items, capacity })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Number of items, which is also the genome length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Scores a genome against this catalog. See [`evaluate`].
    pub fn evaluate(&self, genome: &Genome) -> Result<FitnessResult> {
        evaluate(&self.items, self.capacity, genome)
    }

    /// Shorthand for `evaluate(genome)?.fitness`.
    pub fn fitness(&self, genome: &Genome) -> Result<f64> {
        Ok(self.evaluate(genome)?.fitness)
    }

    /// Sum of the fitness of every genome in `population`.
    pub fn population_fitness(&self, population: &[Genome]) -> Result<f64> {
        population
            .iter()
            .map(|g| self.fitness(g))
            .sum()
    }

    /// The items a genome packs, in catalog order.
    pub fn selected_items(&self, genome: &Genome) -> Result<Vec<&Item>> {
        if genome.len() != self.items.len() {
            return Err(KnapsackError::LengthMismatch {
                expected: self.items.len(),
                actual: genome.len(),
            });
        }
        Ok(genome.included_indices().map(|i| &self.items[i]).collect())
    }
}
