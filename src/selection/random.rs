use crate::error::{GeneticError, Result};
use crate::individual::{Gene, Individual};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{collect_fitness, SelectionStrategy};

/// Uniform selection with replacement, ignoring fitness.
///
/// Still refuses unevaluated populations so it can stand in for any other
/// strategy in the loop.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelection;

impl<G: Gene> SelectionStrategy<G> for RandomSelection {
    fn select(
        &self,
        population: &[Individual<G>],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual<G>>> {
        collect_fitness(population)?;

        if num_to_select == 0 {
            return Ok(Vec::new());
        }
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        Ok((0..num_to_select)
            .map(|_| population[rng.gen_index(population.len())].clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::selection_strategy::test_support::{ids, scored};

    #[test]
    fn test_random_selection_covers_population() {
        let population = scored(&[0.1, 0.2, 0.3]);
        let mut rng = RandomNumberGenerator::from_seed(8);

        let selected = RandomSelection.select(&population, 300, &mut rng).unwrap();
        let picked = ids(&selected);

        assert_eq!(picked.len(), 300);
        for id in 0..3 {
            assert!(picked.contains(&id));
        }
    }

    #[test]
    fn test_random_selection_empty_population() {
        let population: Vec<Individual<usize>> = Vec::new();
        let mut rng = RandomNumberGenerator::from_seed(8);

        assert!(RandomSelection.select(&population, 2, &mut rng).is_err());
    }
}
