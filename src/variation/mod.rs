//! # Variation
//!
//! Crossover and mutation operators, and [`vary`], which applies them to a mating
//! pool the way a simple generational algorithm does: pairwise crossover gated by
//! `cxpb`, then per-individual mutation gated by `mutpb`.
pub mod crossover;
pub mod mutation;

pub use crossover::{Crossover, OnePointCrossover, TwoPointCrossover, UniformCrossover};
pub use mutation::{Flip, FlipBitMutation, Mutation, ShuffleIndexesMutation, UniformIntMutation};

use crate::error::{check_probability, GeneticError, Result};
use crate::individual::{Gene, Individual};
use crate::rng::RandomNumberGenerator;

/// Varies a mating pool in place.
///
/// 1. Consecutive pairs `(0, 1), (2, 3), ...` are crossed with probability
///    `cxpb`, one trial per pair. A trailing odd individual is never crossed.
/// 2. Every individual is then mutated with probability `mutpb`, one trial each.
///
/// Individuals that are neither crossed nor changed by mutation keep their
/// fitness, so they are not re-evaluated.
///
/// # Errors
///
/// Returns a `Configuration` error for probabilities outside `[0, 1]`, propagates
/// operator errors, and returns an `InvariantViolation` if an operator leaves a
/// fitness set after changing genes.
pub fn vary<G, X, M>(
    offspring: &mut [Individual<G>],
    crossover: &X,
    mutation: &M,
    cxpb: f64,
    mutpb: f64,
    rng: &mut RandomNumberGenerator,
) -> Result<()>
where
    G: Gene,
    X: Crossover<G> + ?Sized,
    M: Mutation<G> + ?Sized,
{
    check_probability("cxpb", cxpb)?;
    check_probability("mutpb", mutpb)?;

    for pair in offspring.chunks_exact_mut(2) {
        if rng.gen_bool(cxpb) {
            let (first, second) = pair.split_at_mut(1);
            let (a, b) = (&mut first[0], &mut second[0]);
            crossover.crossover(a, b, rng)?;

            if a.is_evaluated() || b.is_evaluated() {
                return Err(GeneticError::InvariantViolation(format!(
                    "{:?} left a fitness set on its offspring",
                    crossover
                )));
            }
        }
    }

    for individual in offspring.iter_mut() {
        if rng.gen_bool(mutpb) && mutation.mutate(individual, rng)? && individual.is_evaluated()
        {
            return Err(GeneticError::InvariantViolation(format!(
                "{:?} changed genes without invalidating the fitness",
                mutation
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::Weights;

    /// Claims to cross but touches nothing.
    #[derive(Debug)]
    struct LazyCrossover;

    impl Crossover<bool> for LazyCrossover {
        fn crossover(
            &self,
            _a: &mut Individual<bool>,
            _b: &mut Individual<bool>,
            _rng: &mut RandomNumberGenerator,
        ) -> Result<()> {
            Ok(())
        }
    }

    /// Reports a change without making one.
    #[derive(Debug)]
    struct LyingMutation;

    impl Mutation<bool> for LyingMutation {
        fn mutate(
            &self,
            _individual: &mut Individual<bool>,
            _rng: &mut RandomNumberGenerator,
        ) -> Result<bool> {
            Ok(true)
        }
    }

    fn evaluated_pool(size: usize, len: usize) -> Vec<Individual<bool>> {
        (0..size)
            .map(|i| {
                let mut individual = Individual::new(vec![i % 2 == 0; len]);
                individual.set_fitness(Weights::maximize().fitness(vec![0.0]).unwrap());
                individual
            })
            .collect()
    }

    #[test]
    fn test_zero_probabilities_keep_everything() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut pool = evaluated_pool(10, 12);
        let before = pool.clone();

        vary(
            &mut pool,
            &TwoPointCrossover,
            &FlipBitMutation::new(0.5).unwrap(),
            0.0,
            0.0,
            &mut rng,
        )
        .unwrap();

        assert_eq!(pool, before);
    }

    #[test]
    fn test_full_crossover_invalidates_pairs_but_not_odd_tail() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut pool = evaluated_pool(5, 12);

        vary(
            &mut pool,
            &TwoPointCrossover,
            &FlipBitMutation::new(0.5).unwrap(),
            1.0,
            0.0,
            &mut rng,
        )
        .unwrap();

        assert!(pool[..4].iter().all(|i| !i.is_evaluated()));
        assert!(pool[4].is_evaluated());
        assert_eq!(pool.len(), 5);
        assert!(pool.iter().all(|i| i.len() == 12));
    }

    #[test]
    fn test_full_mutation_invalidates_everyone() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut pool = evaluated_pool(6, 12);

        vary(
            &mut pool,
            &TwoPointCrossover,
            &FlipBitMutation::new(1.0).unwrap(),
            0.0,
            1.0,
            &mut rng,
        )
        .unwrap();

        assert!(pool.iter().all(|i| !i.is_evaluated()));
    }

    #[test]
    fn test_crossover_postcondition_is_checked() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut pool = evaluated_pool(2, 4);

        let result = vary(
            &mut pool,
            &LazyCrossover,
            &FlipBitMutation::new(0.0).unwrap(),
            1.0,
            0.0,
            &mut rng,
        );
        assert!(matches!(result, Err(GeneticError::InvariantViolation(_))));
    }

    #[test]
    fn test_mutation_postcondition_is_checked() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut pool = evaluated_pool(2, 4);

        let result = vary(&mut pool, &TwoPointCrossover, &LyingMutation, 0.0, 1.0, &mut rng);
        assert!(matches!(result, Err(GeneticError::InvariantViolation(_))));
    }

    #[test]
    fn test_invalid_probabilities() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let mut pool = evaluated_pool(2, 4);
        let mutation = FlipBitMutation::new(0.1).unwrap();

        assert!(matches!(
            vary(&mut pool, &TwoPointCrossover, &mutation, 1.1, 0.0, &mut rng),
            Err(GeneticError::Configuration(_))
        ));
        assert!(matches!(
            vary(&mut pool, &TwoPointCrossover, &mutation, 0.5, -0.2, &mut rng),
            Err(GeneticError::Configuration(_))
        ));
    }
}
