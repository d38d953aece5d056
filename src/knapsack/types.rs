//! Catalog items and the bitstring genome encoding.

use crate::random::random_bit;
use rand::Rng;
use std::fmt;
use std::ops::Deref;

/// An item in the catalog.
///
/// Items are identified by their position in the catalog; the name is
/// only used for display.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub value: f64,
    pub weight: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, value: f64, weight: f64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
        }
    }
}

impl<S: Into<String>> From<(S, f64, f64)> for Item {
    fn from((name, value, weight): (S, f64, f64)) -> Self {
        Item::new(name, value, weight)
    }
}

/// A single bit of a genome: whether the item at that index is packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gene {
    Excluded = 0,
    Included = 1,
}

impl Gene {
    /// Bit complement.
    pub fn flip(self) -> Self {
        match self {
            Gene::Excluded => Gene::Included,
            Gene::Included => Gene::Excluded,
        }
    }

    pub fn is_included(self) -> bool {
        self == Gene::Included
    }
}

impl From<bool> for Gene {
    fn from(bit: bool) -> Self {
        if bit {
            Gene::Included
        } else {
            Gene::Excluded
        }
    }
}

/// One candidate subset of the catalog, one [`Gene`] per item.
///
/// Operators never modify a genome in place; they return new ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Genome(Vec<Gene>);

impl Genome {
    pub fn new(genes: Vec<Gene>) -> Self {
        Self(genes)
    }

    /// Builds a genome from 0/1 integers. Any non-zero value is a set bit.
    ///
    /// ```
    /// use u_knapsack::knapsack::Genome;
    ///
    /// let g = Genome::from_bits(&[1, 0, 1]);
    /// assert_eq!(g.to_string(), "101");
    /// ```
    pub fn from_bits(bits: &[u8]) -> Self {
        Self(bits.iter().map(|&b| Gene::from(b != 0)).collect())
    }

    /// Generates a genome of `len` independent fair coin flips.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self((0..len).map(|_| Gene::from(random_bit(rng))).collect())
    }

    pub fn genes(&self) -> &[Gene] {
        &self.0
    }

    pub fn into_genes(self) -> Vec<Gene> {
        self.0
    }

    /// Indices of the items this genome packs.
    pub fn included_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, g)| g.is_included())
            .map(|(i, _)| i)
    }

    /// Complements the gene at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn with_flipped(mut self, index: usize) -> Self {
        self.0[index] = self.0[index].flip();
        self
    }
}

impl Deref for Genome {
    type Target = [Gene];

    fn deref(&self) -> &[Gene] {
        &self.0
    }
}

impl From<Vec<Gene>> for Genome {
    fn from(genes: Vec<Gene>) -> Self {
        Self(genes)
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.0 {
            f.write_str(if gene.is_included() { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Generates `size` random genomes of length `genome_len`.
pub fn generate_population<R: Rng>(size: usize, genome_len: usize, rng: &mut R) -> Vec<Genome> {
    (0..size).map(|_| Genome::random(genome_len, rng)).collect()
}
