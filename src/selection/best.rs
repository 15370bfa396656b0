use crate::error::{GeneticError, Result};
use crate::individual::{Gene, Individual};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{collect_fitness, SelectionStrategy};

/// A selection strategy that returns the best individuals, fittest first.
///
/// Individuals with equal fitness keep their population order. At most
/// `population.len()` individuals are returned, each at most once. No
/// randomness is consumed.
///
/// # Examples
///
/// ```
/// use simplega::evaluation::Evaluator;
/// use simplega::fitness::Weights;
/// use simplega::individual::Individual;
/// use simplega::rng::RandomNumberGenerator;
/// use simplega::selection::{BestSelection, SelectionStrategy};
///
/// let evaluator = Evaluator::new(|genes: &[u8]| vec![genes[0] as f64], Weights::maximize());
/// let mut population: Vec<Individual<u8>> =
///     [3, 9, 1].iter().map(|v| Individual::new(vec![*v])).collect();
/// evaluator.evaluate_all(&mut population).unwrap();
///
/// let mut rng = RandomNumberGenerator::from_seed(0);
/// let best = BestSelection.select(&population, 1, &mut rng).unwrap();
/// assert_eq!(best[0].genes(), &[9]);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct BestSelection;

impl BestSelection {
    /// Indices of `population` ordered fittest first.
    pub fn ranking<G: Gene>(population: &[Individual<G>]) -> Result<Vec<usize>> {
        let fitness = collect_fitness(population)?;
        let mut indices: Vec<usize> = (0..population.len()).collect();
        // Stable, so equal fitness keeps population order.
        indices.sort_by(|&a, &b| fitness[b].cmp_score(fitness[a]));
        Ok(indices)
    }
}

impl<G: Gene> SelectionStrategy<G> for BestSelection {
    fn select(
        &self,
        population: &[Individual<G>],
        num_to_select: usize,
        _rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual<G>>> {
        let ranking = Self::ranking(population)?;

        if population.is_empty() && num_to_select > 0 {
            return Err(GeneticError::EmptyPopulation);
        }

        Ok(ranking
            .into_iter()
            .take(num_to_select)
            .map(|idx| population[idx].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::selection_strategy::test_support::{ids, scored};

    #[test]
    fn test_best_selection() {
        let population = scored(&[0.5, 0.8, 0.3, 0.9, 0.1]);
        let mut rng = RandomNumberGenerator::from_seed(0);

        let selected = BestSelection.select(&population, 3, &mut rng).unwrap();

        assert_eq!(ids(&selected), vec![3, 1, 0]);
    }

    #[test]
    fn test_best_selection_caps_at_population_size() {
        let population = scored(&[0.5, 0.8, 0.3]);
        let mut rng = RandomNumberGenerator::from_seed(0);

        let selected = BestSelection.select(&population, 5, &mut rng).unwrap();

        assert_eq!(ids(&selected), vec![1, 0, 2]);
    }

    #[test]
    fn test_best_selection_ties_keep_order() {
        let population = scored(&[0.2, 0.7, 0.7, 0.2]);
        assert_eq!(BestSelection::ranking(&population).unwrap(), vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_best_selection_empty_population() {
        let population: Vec<Individual<usize>> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(0);

        assert!(matches!(
            BestSelection.select(&population, 1, &mut rng),
            Err(GeneticError::EmptyPopulation)
        ));
    }

    #[test]
    fn test_best_selection_unset_fitness() {
        let population = vec![Individual::new(vec![0usize])];
        let mut rng = RandomNumberGenerator::from_seed(0);

        assert!(matches!(
            BestSelection.select(&population, 1, &mut rng),
            Err(GeneticError::InvariantViolation(_))
        ));
    }
}
