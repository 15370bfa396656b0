use std::fmt::Debug;

use crate::error::Result;
use crate::fitness::Fitness;
use crate::individual::{Gene, Individual};
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies.
///
/// A selection strategy picks individuals from an evaluated population to fill
/// the mating pool, biased toward higher fitness. The returned individuals are
/// clones, so the pool can be varied without touching the population.
///
/// # Examples
///
/// ```
/// use simplega::evaluation::Evaluator;
/// use simplega::fitness::Weights;
/// use simplega::individual::Individual;
/// use simplega::rng::RandomNumberGenerator;
/// use simplega::selection::{SelectionStrategy, TournamentSelection};
/// use simplega::error::Result;
///
/// fn main() -> Result<()> {
///     let evaluator = Evaluator::new(
///         |genes: &[u8]| vec![genes[0] as f64],
///         Weights::maximize(),
///     );
///     let mut population: Vec<Individual<u8>> =
///         (0..5).map(|v| Individual::new(vec![v])).collect();
///     evaluator.evaluate_all(&mut population)?;
///
///     let mut rng = RandomNumberGenerator::from_seed(3);
///     let selection = TournamentSelection::new(3)?;
///     let selected = selection.select(&population, 4, &mut rng)?;
///
///     assert_eq!(selected.len(), 4);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<G: Gene>: Debug + Send + Sync {
    /// Selects `num_to_select` individuals from `population`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any individual in the population has an unset fitness (`InvariantViolation`)
    /// - The population is empty while `num_to_select > 0` (`EmptyPopulation`)
    fn select(
        &self,
        population: &[Individual<G>],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual<G>>>;
}

/// Collects every fitness of `population`, failing on the first unset one.
pub(crate) fn collect_fitness<G: Gene>(population: &[Individual<G>]) -> Result<Vec<&Fitness>> {
    population
        .iter()
        .map(|individual| individual.expect_fitness())
        .collect()
}
