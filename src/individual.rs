//! # Individual
//!
//! An `Individual` is one candidate solution: a fixed-length sequence of genes plus
//! a memoized [`Fitness`]. The fitness starts out unset and is only ever set by the
//! [`Evaluator`](crate::evaluation::Evaluator). Every method that can change a gene
//! clears the cached fitness, so a stale value can never survive a variation.
//!
//! ## Example
//!
//! ```rust
//! use simplega::individual::Individual;
//! use simplega::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let mut individual = Individual::random(30, &mut rng, |rng| rng.gen_bool(0.5));
//!
//! assert_eq!(individual.len(), 30);
//! assert!(!individual.is_evaluated());
//!
//! let flipped = !individual.genes()[0];
//! assert!(individual.set_gene(0, flipped));
//! ```

use std::fmt::Debug;
use std::ops::Range;

use crate::error::{GeneticError, Result};
use crate::fitness::Fitness;
use crate::rng::RandomNumberGenerator;

/// Marker for types usable as genes.
///
/// Any cloneable, comparable, thread-safe type qualifies; `bool` is the usual
/// choice for bit-string problems.
pub trait Gene: Clone + Debug + PartialEq + Send + Sync {}

impl<T> Gene for T where T: Clone + Debug + PartialEq + Send + Sync {}

/// A candidate solution with a cached fitness.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Individual<G> {
    genes: Vec<G>,
    fitness: Option<Fitness>,
}

impl<G: Gene> Individual<G> {
    /// Creates an unevaluated individual from the given genes.
    pub fn new(genes: Vec<G>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Creates an unevaluated individual of length `len`, drawing every gene
    /// independently from `gene_fn`.
    pub fn random<F>(len: usize, rng: &mut RandomNumberGenerator, mut gene_fn: F) -> Self
    where
        F: FnMut(&mut RandomNumberGenerator) -> G,
    {
        Self::new((0..len).map(|_| gene_fn(rng)).collect())
    }

    pub fn genes(&self) -> &[G] {
        &self.genes
    }

    pub fn into_genes(self) -> Vec<G> {
        self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// The cached fitness, `None` while unset.
    pub fn fitness(&self) -> Option<&Fitness> {
        self.fitness.as_ref()
    }

    /// Returns the fitness or an `InvariantViolation` if it is unset.
    ///
    /// Selection, statistics and the hall of fame go through this, since none of
    /// them may ever observe an unevaluated individual.
    pub fn expect_fitness(&self) -> Result<&Fitness> {
        self.fitness.as_ref().ok_or_else(|| {
            GeneticError::InvariantViolation(
                "Encountered an individual with unset fitness".to_string(),
            )
        })
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Clears the cached fitness.
    pub fn invalidate(&mut self) {
        self.fitness = None;
    }

    pub(crate) fn set_fitness(&mut self, fitness: Fitness) {
        self.fitness = Some(fitness);
    }

    /// Replaces the gene at `index`, returning whether it actually changed.
    /// The fitness is invalidated only on change.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set_gene(&mut self, index: usize, gene: G) -> bool {
        if self.genes[index] == gene {
            return false;
        }
        self.genes[index] = gene;
        self.invalidate();
        true
    }

    /// Mutable access to the genes. Invalidates the fitness up front since the
    /// caller may change anything.
    pub fn genes_mut(&mut self) -> &mut [G] {
        self.invalidate();
        &mut self.genes
    }

    /// Exchanges the genes in `range` between `self` and `other` and invalidates
    /// both fitnesses.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the genomes differ in length or the range
    /// does not fit inside them.
    pub fn swap_segment(&mut self, other: &mut Self, range: Range<usize>) -> Result<()> {
        check_same_length(self, other)?;

        if range.start > range.end || range.end > self.len() {
            return Err(GeneticError::Validation(format!(
                "Segment {}..{} does not fit a genome of length {}",
                range.start,
                range.end,
                self.len()
            )));
        }

        self.genes[range.clone()].swap_with_slice(&mut other.genes[range]);
        self.invalidate();
        other.invalidate();
        Ok(())
    }
}

/// Returns a `Validation` error unless both genomes have the same length.
pub fn check_same_length<G>(a: &Individual<G>, b: &Individual<G>) -> Result<()> {
    if a.genes.len() != b.genes.len() {
        return Err(GeneticError::Validation(format!(
            "Genome lengths differ: {} vs {}",
            a.genes.len(),
            b.genes.len()
        )));
    }
    Ok(())
}

/// Builds `size` random, unevaluated individuals of length `genome_length`.
pub fn initial_population<G, F>(
    size: usize,
    genome_length: usize,
    rng: &mut RandomNumberGenerator,
    mut gene_fn: F,
) -> Vec<Individual<G>>
where
    G: Gene,
    F: FnMut(&mut RandomNumberGenerator) -> G,
{
    (0..size)
        .map(|_| Individual::random(genome_length, rng, &mut gene_fn))
        .collect()
}
