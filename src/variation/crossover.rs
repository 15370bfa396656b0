//! Crossover operators.
//!
//! A crossover recombines two parents in place, turning them into two offspring.
//! Every operator invalidates both fitnesses, whether or not genes moved.

use std::fmt::Debug;

use crate::error::{check_probability, Result};
use crate::individual::{check_same_length, Gene, Individual};
use crate::rng::RandomNumberGenerator;

/// Recombines two individuals of equal length in place.
pub trait Crossover<G: Gene>: Debug + Send + Sync {
    /// # Errors
    ///
    /// Returns a `Validation` error if the genomes differ in length.
    fn crossover(
        &self,
        a: &mut Individual<G>,
        b: &mut Individual<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()>;
}

/// Two-point crossover.
///
/// Picks cut points `1 <= i < j <= L` and swaps the segment `[i, j)` between the
/// parents. Genomes shorter than two genes cannot be cut and are left as they
/// are.
///
/// # Examples
///
/// ```
/// use simplega::individual::Individual;
/// use simplega::rng::RandomNumberGenerator;
/// use simplega::variation::{Crossover, TwoPointCrossover};
///
/// let mut rng = RandomNumberGenerator::from_seed(5);
/// let mut a = Individual::new(vec![true; 10]);
/// let mut b = Individual::new(vec![false; 10]);
///
/// TwoPointCrossover.crossover(&mut a, &mut b, &mut rng).unwrap();
///
/// let ones = a.genes().iter().chain(b.genes()).filter(|g| **g).count();
/// assert_eq!(ones, 10);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoPointCrossover;

impl TwoPointCrossover {
    /// Draws the cut points for a genome of `size >= 2` genes.
    ///
    /// `i` is uniform over `[1, size]`, `j` over `[1, size - 1]` and then shifted
    /// past `i`, which yields every distinct pair without rejection sampling.
    fn cut_points(size: usize, rng: &mut RandomNumberGenerator) -> (usize, usize) {
        let i = rng.gen_range(1..=size);
        let j = rng.gen_range(1..size);
        if j >= i {
            (i, j + 1)
        } else {
            (j, i)
        }
    }
}

impl<G: Gene> Crossover<G> for TwoPointCrossover {
    fn crossover(
        &self,
        a: &mut Individual<G>,
        b: &mut Individual<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        check_same_length(a, b)?;

        if a.len() < 2 {
            a.invalidate();
            b.invalidate();
            return Ok(());
        }

        let (i, j) = Self::cut_points(a.len(), rng);
        a.swap_segment(b, i..j)
    }
}

/// One-point crossover: swaps everything from a cut point in `[1, L - 1]` to the
/// end of the genome.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct OnePointCrossover;

impl<G: Gene> Crossover<G> for OnePointCrossover {
    fn crossover(
        &self,
        a: &mut Individual<G>,
        b: &mut Individual<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        check_same_length(a, b)?;

        let size = a.len();
        if size < 2 {
            a.invalidate();
            b.invalidate();
            return Ok(());
        }

        let point = rng.gen_range(1..size);
        a.swap_segment(b, point..size)
    }
}

/// Uniform crossover: each position is swapped independently with probability
/// `indpb`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy)]
pub struct UniformCrossover {
    indpb: f64,
}

impl UniformCrossover {
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

impl<G: Gene> Crossover<G> for UniformCrossover {
    fn crossover(
        &self,
        a: &mut Individual<G>,
        b: &mut Individual<G>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        check_same_length(a, b)?;

        let genes_a = a.genes_mut();
        let genes_b = b.genes_mut();
        for (gene_a, gene_b) in genes_a.iter_mut().zip(genes_b.iter_mut()) {
            if rng.gen_bool(self.indpb) {
                std::mem::swap(gene_a, gene_b);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeneticError;
    use crate::fitness::Weights;

    fn evaluated(genes: Vec<u8>) -> Individual<u8> {
        let mut individual = Individual::new(genes);
        individual.set_fitness(Weights::maximize().fitness(vec![0.0]).unwrap());
        individual
    }

    fn sorted(mut genes: Vec<u8>) -> Vec<u8> {
        genes.sort_unstable();
        genes
    }

    #[test]
    fn test_cut_points_are_distinct_and_in_range() {
        let mut rng = RandomNumberGenerator::from_seed(9);
        for size in 2..12 {
            for _ in 0..200 {
                let (i, j) = TwoPointCrossover::cut_points(size, &mut rng);
                assert!(1 <= i && i < j && j <= size, "bad cut {}..{} for {}", i, j, size);
            }
        }
    }

    #[test]
    fn test_two_point_conserves_genes() {
        let mut rng = RandomNumberGenerator::from_seed(21);
        let parent_a: Vec<u8> = (0..30).collect();
        let parent_b: Vec<u8> = (100..130).collect();

        for _ in 0..50 {
            let mut a = evaluated(parent_a.clone());
            let mut b = evaluated(parent_b.clone());

            TwoPointCrossover.crossover(&mut a, &mut b, &mut rng).unwrap();

            assert_eq!(a.len(), 30);
            assert_eq!(b.len(), 30);
            assert!(!a.is_evaluated());
            assert!(!b.is_evaluated());

            let mut before = parent_a.clone();
            before.extend(&parent_b);
            let mut after = a.genes().to_vec();
            after.extend(b.genes());
            assert_eq!(sorted(before), sorted(after));

            // Position-wise, each slot holds one gene from each parent.
            for k in 0..30 {
                let pair = sorted(vec![a.genes()[k], b.genes()[k]]);
                assert_eq!(pair, sorted(vec![parent_a[k], parent_b[k]]));
            }
        }
    }

    #[test]
    fn test_two_point_is_deterministic() {
        let run = || {
            let mut rng = RandomNumberGenerator::from_seed(77);
            let mut a = Individual::new((0..20u8).collect());
            let mut b = Individual::new((20..40u8).collect());
            TwoPointCrossover.crossover(&mut a, &mut b, &mut rng).unwrap();
            (a, b)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_short_genomes_are_invalidated_only() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut a = evaluated(vec![1]);
        let mut b = evaluated(vec![2]);

        TwoPointCrossover.crossover(&mut a, &mut b, &mut rng).unwrap();

        assert_eq!(a.genes(), &[1]);
        assert_eq!(b.genes(), &[2]);
        assert!(!a.is_evaluated() && !b.is_evaluated());
    }

    #[test]
    fn test_length_mismatch() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut a = Individual::new(vec![0u8; 5]);
        let mut b = Individual::new(vec![0u8; 6]);

        for result in [
            TwoPointCrossover.crossover(&mut a, &mut b, &mut rng),
            OnePointCrossover.crossover(&mut a, &mut b, &mut rng),
            UniformCrossover::new(0.5)
                .unwrap()
                .crossover(&mut a, &mut b, &mut rng),
        ] {
            assert!(matches!(result, Err(GeneticError::Validation(_))));
        }
    }

    #[test]
    fn test_one_point_swaps_a_suffix() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut a = Individual::new(vec![0u8; 8]);
        let mut b = Individual::new(vec![1u8; 8]);

        OnePointCrossover.crossover(&mut a, &mut b, &mut rng).unwrap();

        let point = a.genes().iter().position(|g| *g == 1).unwrap();
        assert!(point >= 1);
        assert!(a.genes()[point..].iter().all(|g| *g == 1));
        assert!(b.genes()[..point].iter().all(|g| *g == 1));
    }

    #[test]
    fn test_uniform_extremes() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut a = evaluated(vec![0u8; 8]);
        let mut b = evaluated(vec![1u8; 8]);

        UniformCrossover::new(0.0)
            .unwrap()
            .crossover(&mut a, &mut b, &mut rng)
            .unwrap();
        assert_eq!(a.genes(), &[0u8; 8]);
        assert!(!a.is_evaluated());

        UniformCrossover::new(1.0)
            .unwrap()
            .crossover(&mut a, &mut b, &mut rng)
            .unwrap();
        assert_eq!(a.genes(), &[1u8; 8]);
        assert_eq!(b.genes(), &[0u8; 8]);
    }

    #[test]
    fn test_uniform_rejects_bad_probability() {
        assert!(UniformCrossover::new(1.5).is_err());
    }
}
