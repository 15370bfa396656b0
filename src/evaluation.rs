//! # Fitness Evaluation
//!
//! The [`Challenge`] trait is the caller-supplied objective: a pure function from a
//! genome to a tuple of objective values. The [`Evaluator`] wraps a challenge
//! together with the declared [`Weights`] and applies it only to individuals whose
//! fitness is unset, so every fitness is computed at most once per individual.
//!
//! ## Example
//!
//! ```rust
//! use simplega::evaluation::Evaluator;
//! use simplega::fitness::Weights;
//! use simplega::individual::Individual;
//!
//! let evaluator = Evaluator::new(
//!     |genes: &[bool]| vec![genes.iter().filter(|g| **g).count() as f64],
//!     Weights::maximize(),
//! );
//!
//! let mut population = vec![
//!     Individual::new(vec![true, true, false]),
//!     Individual::new(vec![false, false, false]),
//! ];
//!
//! assert_eq!(evaluator.evaluate_all(&mut population).unwrap(), 2);
//! assert_eq!(population[0].fitness().unwrap().value(), 2.0);
//!
//! // Nothing left to evaluate.
//! assert_eq!(evaluator.evaluate_all(&mut population).unwrap(), 0);
//! ```

use std::marker::PhantomData;

use rayon::prelude::*;
use tracing::trace;

use crate::error::Result;
use crate::fitness::{Fitness, Weights};
use crate::individual::{Gene, Individual};

/// Number of pending evaluations from which `evaluate_all` fans out over rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// The objective function.
///
/// Implementations must be pure: the same genes always give the same values, and
/// scoring one genome never affects another. The returned tuple must have one
/// value per declared weight.
///
/// Any `Fn(&[G]) -> Vec<f64>` closure is a challenge. Implement the trait directly
/// for objectives that can fail.
pub trait Challenge<G>: Send + Sync {
    fn score(&self, genes: &[G]) -> Result<Vec<f64>>;
}

impl<G, F> Challenge<G> for F
where
    F: Fn(&[G]) -> Vec<f64> + Send + Sync,
{
    fn score(&self, genes: &[G]) -> Result<Vec<f64>> {
        Ok(self(genes))
    }
}

/// Applies a [`Challenge`] to individuals lacking a fitness.
#[derive(Debug, Clone)]
pub struct Evaluator<G, C> {
    challenge: C,
    weights: Weights,
    _marker: PhantomData<fn(&[G])>,
}

impl<G, C> Evaluator<G, C>
where
    G: Gene,
    C: Challenge<G>,
{
    pub fn new(challenge: C, weights: Weights) -> Self {
        Self {
            challenge,
            weights,
            _marker: PhantomData,
        }
    }

    pub fn challenge(&self) -> &C {
        &self.challenge
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Scores `genes` and validates the result against the weights.
    ///
    /// # Errors
    ///
    /// Returns an `Evaluation` error if the challenge fails, returns the wrong
    /// number of values or a non-finite value.
    pub fn score(&self, genes: &[G]) -> Result<Fitness> {
        let values = self.challenge.score(genes)?;
        self.weights.fitness(values)
    }

    /// Sets the fitness of `individual` if it is unset.
    ///
    /// Returns whether the challenge was invoked. Calling it again on an
    /// evaluated individual is a no-op.
    pub fn evaluate(&self, individual: &mut Individual<G>) -> Result<bool> {
        if individual.is_evaluated() {
            return Ok(false);
        }
        let fitness = self.score(individual.genes())?;
        individual.set_fitness(fitness);
        Ok(true)
    }

    /// Evaluates every individual with an unset fitness and returns how many
    /// were evaluated.
    pub fn evaluate_all(&self, population: &mut [Individual<G>]) -> Result<usize> {
        self.evaluate_all_with_threshold(population, DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Like [`evaluate_all`](Self::evaluate_all), scoring in parallel once at
    /// least `parallel_threshold` individuals are pending.
    ///
    /// The call returns only after every evaluation has finished. Evaluation
    /// draws no randomness, so the outcome is the same either way.
    pub fn evaluate_all_with_threshold(
        &self,
        population: &mut [Individual<G>],
        parallel_threshold: usize,
    ) -> Result<usize> {
        let pending: Vec<&mut Individual<G>> = population
            .iter_mut()
            .filter(|individual| !individual.is_evaluated())
            .collect();
        let count = pending.len();

        if count >= parallel_threshold {
            trace!(count, "Evaluating individuals in parallel");
            pending.into_par_iter().try_for_each(|individual| -> Result<()> {
                let fitness = self.score(individual.genes())?;
                individual.set_fitness(fitness);
                Ok(())
            })?;
        } else {
            trace!(count, "Evaluating individuals");
            for individual in pending {
                let fitness = self.score(individual.genes())?;
                individual.set_fitness(fitness);
            }
        }

        Ok(count)
    }
}
