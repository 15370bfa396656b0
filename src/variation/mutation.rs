//! Mutation operators.
//!
//! A mutation perturbs one individual in place and reports whether any gene
//! actually changed. The fitness is invalidated exactly when it did.

use std::fmt::Debug;

use rand::distributions::uniform::SampleUniform;

use crate::error::{check_probability, GeneticError, Result};
use crate::individual::{Gene, Individual};
use crate::rng::RandomNumberGenerator;

/// Perturbs an individual in place.
pub trait Mutation<G: Gene>: Debug + Send + Sync {
    /// Returns `true` if at least one gene changed.
    fn mutate(&self, individual: &mut Individual<G>, rng: &mut RandomNumberGenerator)
        -> Result<bool>;
}

/// Genes with a complementary value.
pub trait Flip {
    fn flip(&self) -> Self;
}

impl Flip for bool {
    fn flip(&self) -> Self {
        !*self
    }
}

macro_rules! impl_flip_for_int {
    ($($t:ty),*) => {
        $(
            impl Flip for $t {
                /// Zero becomes one, anything else becomes zero.
                fn flip(&self) -> Self {
                    if *self == 0 { 1 } else { 0 }
                }
            }
        )*
    };
}

impl_flip_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Flips each gene independently with probability `indpb`.
///
/// # Examples
///
/// ```
/// use simplega::individual::Individual;
/// use simplega::rng::RandomNumberGenerator;
/// use simplega::variation::{FlipBitMutation, Mutation};
///
/// let mut rng = RandomNumberGenerator::from_seed(2);
/// let mut individual = Individual::new(vec![false; 8]);
///
/// let changed = FlipBitMutation::new(1.0)
///     .unwrap()
///     .mutate(&mut individual, &mut rng)
///     .unwrap();
///
/// assert!(changed);
/// assert_eq!(individual.genes(), &[true; 8]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct FlipBitMutation {
    indpb: f64,
}

impl FlipBitMutation {
    /// # Errors
    ///
    /// Returns a `Configuration` error if `indpb` is not within `[0, 1]`.
    pub fn new(indpb: f64) -> Result<Self> {
        Ok(Self {
            indpb: check_probability("indpb", indpb)?,
        })
    }

    pub fn indpb(&self) -> f64 {
        self.indpb
    }
}

impl<G: Gene + Flip> Mutation<G> for FlipBitMutation {
    fn mutate(
        &self,
        individual: &mut Individual<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<bool> {
        let mut changed = false;
        for index in 0..individual.len() {
            if rng.gen_bool(self.indpb) {
                let flipped = individual.genes()[index].flip();
                changed |= individual.set_gene(index, flipped);
            }
        }
        Ok(changed)
    }
}

/// Replaces each gene, with probability `indpb`, by a value drawn uniformly from
/// `[low, high]`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct UniformIntMutation<G> {
    low: G,
    high: G,
    indpb: f64,
}

impl<G> UniformIntMutation<G>
where
    G: Gene + Copy + PartialOrd + SampleUniform,
{
    /// # Errors
    ///
    /// Returns a `Configuration` error if `low > high` or `indpb` is not within
    /// `[0, 1]`.
    pub fn new(low: G, high: G, indpb: f64) -> Result<Self> {
        if low > high {
            return Err(GeneticError::Configuration(format!(
                "Lower bound {:?} exceeds upper bound {:?}",
                low, high
            )));
        }
        Ok(Self {
            low,
            high,
            indpb: check_probability("indpb", indpb)?,
        })
    }
}

impl<G> Mutation<G> for UniformIntMutation<G>
where
    G: Gene + Copy + PartialOrd + SampleUniform,
{
    fn mutate(
        &self,
        individual: &mut Individual<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<bool> {
        let mut changed = false;
        for index in 0..individual.len() {
            if rng.gen_bool(self.indpb) {
                let value = rng.gen_range(self.low..=self.high);
                changed |= individual.set_gene(index, value);
            }
        }
        Ok(changed)
    }
}

/// Swaps each gene, with probability `indpb`, with another uniformly chosen
/// position. Keeps the multiset of genes, which suits permutation genomes.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct ShuffleIndexesMutation {
    indpb: f64,
}

impl ShuffleIndexesMutation {
    /// # Errors
    ///
    /// Returns a `Configuration` error if `indpb` is not within `[0, 1]`.
    pub fn new(indpb: f64) -> Result<Self> {
        Ok(Self {
            indpb: check_probability("indpb", indpb)?,
        })
    }
}

impl<G: Gene> Mutation<G> for ShuffleIndexesMutation {
    fn mutate(
        &self,
        individual: &mut Individual<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<bool> {
        let size = individual.len();
        if size < 2 {
            return Ok(false);
        }

        let mut changed = false;
        for index in 0..size {
            if rng.gen_bool(self.indpb) {
                // Uniform over every position except `index`.
                let mut other = rng.gen_range(0..size - 1);
                if other >= index {
                    other += 1;
                }
                let gene = individual.genes()[index].clone();
                let other_gene = individual.genes()[other].clone();
                changed |= individual.set_gene(index, other_gene);
                changed |= individual.set_gene(other, gene);
            }
        }
        Ok(changed)
    }
}
