use tracing::{debug, info, trace};

use super::options::{EvolutionOptions, LogLevel};
use crate::{
    error::{GeneticError, OptionExt, Result},
    evaluation::{Challenge, Evaluator},
    hall_of_fame::HallOfFame,
    individual::{initial_population, Gene, Individual},
    rng::RandomNumberGenerator,
    selection::{BestSelection, SelectionStrategy},
    statistics::{LogRecord, Logbook, Statistics},
    variation::{vary, Crossover, Mutation},
};

/// Everything a run produces.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<G> {
    /// The final, fully evaluated population.
    pub population: Vec<Individual<G>>,
    /// One record per generation, generation 0 included.
    pub logbook: Logbook,
    /// The best individuals seen during the whole run.
    pub hall_of_fame: HallOfFame<G>,
}

impl<G: Gene> EvolutionResult<G> {
    /// The fittest individual of the final population.
    pub fn best(&self) -> Result<&Individual<G>> {
        let ranking = BestSelection::ranking(&self.population)?;
        ranking
            .first()
            .map(|&idx| &self.population[idx])
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }
}

/// Runs the generational loop with the injected evaluator and operators.
///
/// Each generation the whole population is replaced by its offspring:
/// select a mating pool of the population's size, vary it, evaluate the
/// individuals whose fitness was invalidated, then record the hall of fame and
/// statistics. Every random decision is drawn from the one
/// [`RandomNumberGenerator`] passed in, so a seeded generator replays a run
/// exactly.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<G, C, S, X, M> {
    evaluator: Evaluator<G, C>,
    selection: S,
    crossover: X,
    mutation: M,
}

impl<G, C, S, X, M> EvolutionLauncher<G, C, S, X, M>
where
    G: Gene,
    C: Challenge<G>,
    S: SelectionStrategy<G>,
    X: Crossover<G>,
    M: Mutation<G>,
{
    /// Creates a new `EvolutionLauncher`.
    ///
    /// # Arguments
    ///
    /// * `evaluator` - Scores individuals lacking a fitness.
    /// * `selection` - Fills the mating pool.
    /// * `crossover` - Recombines consecutive pairs of the mating pool.
    /// * `mutation` - Perturbs individuals of the mating pool.
    pub fn new(evaluator: Evaluator<G, C>, selection: S, crossover: X, mutation: M) -> Self {
        Self {
            evaluator,
            selection,
            crossover,
            mutation,
        }
    }

    pub fn evaluator(&self) -> &Evaluator<G, C> {
        &self.evaluator
    }

    /// Creates a random initial population with `gene_fn` and evolves it.
    ///
    /// # Errors
    ///
    /// See [`evolve`](Self::evolve).
    pub fn run<F>(
        &self,
        options: &EvolutionOptions,
        statistics: Statistics,
        gene_fn: F,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<G>>
    where
        F: FnMut(&mut RandomNumberGenerator) -> G,
    {
        options.validate()?;
        let population = initial_population(
            options.get_population_size(),
            options.get_genome_length(),
            rng,
            gene_fn,
        );
        self.evolve(population, options, statistics, rng)
    }

    /// Evolves `population` for `options.get_num_generations()` generations.
    ///
    /// Individuals that already carry a fitness are not re-evaluated.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid or the population does not have the configured
    ///   size (`Configuration`)
    /// - A genome does not have the configured length (`Validation`)
    /// - The objective fails (`Evaluation`)
    /// - An operator breaks an invariant (`InvariantViolation`)
    ///
    /// The run stops at the first error; no partial result is returned.
    pub fn evolve(
        &self,
        mut population: Vec<Individual<G>>,
        options: &EvolutionOptions,
        mut statistics: Statistics,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<G>> {
        options.validate()?;
        let population_size = options.get_population_size();

        if population.len() != population_size {
            return Err(GeneticError::Configuration(format!(
                "Population has {} individuals, expected {}",
                population.len(),
                population_size
            )));
        }

        if let Some(bad) = population
            .iter()
            .find(|individual| individual.len() != options.get_genome_length())
        {
            return Err(GeneticError::Validation(format!(
                "Genome of length {} in a population configured for length {}",
                bad.len(),
                options.get_genome_length()
            )));
        }

        let log_level = options.get_log_level();
        if log_level != LogLevel::None {
            info!(
                population_size,
                genome_length = options.get_genome_length(),
                num_generations = options.get_num_generations(),
                cxpb = options.get_crossover_probability(),
                mutpb = options.get_mutation_probability(),
                "Starting evolution"
            );
        }

        let mut hall_of_fame = HallOfFame::new(options.get_hall_of_fame_size());

        let nevals = self
            .evaluator
            .evaluate_all_with_threshold(&mut population, options.get_parallel_threshold())?;
        hall_of_fame.update(&population)?;
        log_record(log_level, statistics.record(0, &population, nevals)?);

        for generation in 1..=options.get_num_generations() {
            let mut offspring = self
                .selection
                .select(&population, population_size, rng)?;

            if offspring.len() != population_size {
                return Err(GeneticError::InvariantViolation(format!(
                    "{:?} selected {} individuals, expected {}",
                    self.selection,
                    offspring.len(),
                    population_size
                )));
            }

            vary(
                &mut offspring,
                &self.crossover,
                &self.mutation,
                options.get_crossover_probability(),
                options.get_mutation_probability(),
                rng,
            )?;

            let nevals = self
                .evaluator
                .evaluate_all_with_threshold(&mut offspring, options.get_parallel_threshold())?;

            population = offspring;

            hall_of_fame.update(&population)?;
            log_record(log_level, statistics.record(generation, &population, nevals)?);
        }

        if log_level != LogLevel::None {
            let best = hall_of_fame
                .best()
                .and_then(|individual| individual.fitness())
                .map(|fitness| fitness.values().to_vec());
            info!(best = ?best, "Evolution finished");
        }

        Ok(EvolutionResult {
            population,
            logbook: statistics.into_logbook(),
            hall_of_fame,
        })
    }
}

fn log_record(log_level: LogLevel, record: &LogRecord) {
    match log_level {
        LogLevel::Verbose => info!(
            gen = record.gen,
            nevals = record.nevals,
            metrics = ?record.metrics,
            "Generation complete"
        ),
        LogLevel::Minimal => debug!(gen = record.gen, nevals = record.nevals, "Generation complete"),
        LogLevel::None => trace!(gen = record.gen, nevals = record.nevals, "Generation complete"),
    }
}
