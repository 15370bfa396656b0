use crate::error::{GeneticError, Result};
use crate::fitness::Fitness;
use crate::individual::{Gene, Individual};
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::{collect_fitness, SelectionStrategy};

/// A selection strategy that selects individuals through tournament selection.
///
/// For every pick, `tournament_size` contestants are drawn uniformly at random
/// from the population, with replacement, and the fittest of them wins. Ties go
/// to the contestant drawn first.
///
/// Tournament selection provides a balance between exploration and exploitation:
/// - A tournament size of 1 is uniform random selection
/// - Larger tournament sizes lead to more exploitation (more focus on the best individuals)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct TournamentSelection {
    tournament_size: usize,
}

impl TournamentSelection {
    /// Creates a new TournamentSelection strategy with the specified tournament size.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if `tournament_size` is 0.
    pub fn new(tournament_size: usize) -> Result<Self> {
        if tournament_size < 1 {
            return Err(GeneticError::Configuration(
                "Tournament size must be at least 1".to_string(),
            ));
        }

        Ok(Self { tournament_size })
    }

    pub fn tournament_size(&self) -> usize {
        self.tournament_size
    }

    /// Runs a single tournament and returns the index of the winner.
    fn run_tournament(&self, fitness: &[&Fitness], rng: &mut RandomNumberGenerator) -> usize {
        let mut best_idx = rng.gen_index(fitness.len());

        for _ in 1..self.tournament_size {
            let idx = rng.gen_index(fitness.len());
            if fitness[idx].is_better_than(fitness[best_idx]) {
                best_idx = idx;
            }
        }

        best_idx
    }
}

impl<G: Gene> SelectionStrategy<G> for TournamentSelection {
    fn select(
        &self,
        population: &[Individual<G>],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Individual<G>>> {
        let fitness = collect_fitness(population)?;

        if num_to_select == 0 {
            return Ok(Vec::new());
        }
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        Ok((0..num_to_select)
            .map(|_| population[self.run_tournament(&fitness, rng)].clone())
            .collect())
    }
}
