//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the run configuration of the generational
//! loop: population size, genome length, crossover and mutation probabilities,
//! number of generations and hall of fame capacity. None of these have defaults;
//! the builder refuses to build until every one is given.
//!
//! Operator parameters (per-gene mutation probability, tournament size) belong to
//! the operators themselves and are validated by their constructors.
//!
//! ## Example
//!
//! ```rust
//! use simplega::evolution::options::{EvolutionOptions, LogLevel};
//!
//! let options = EvolutionOptions::builder()
//!     .num_generations(5)
//!     .population_size(300)
//!     .genome_length(30)
//!     .crossover_probability(0.5)
//!     .mutation_probability(0.2)
//!     .hall_of_fame_size(1)
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_population_size(), 300);
//!
//! // Missing fields are a configuration error.
//! assert!(EvolutionOptions::builder().num_generations(5).build().is_err());
//! ```
//!
//! ### `LogLevel`
//!
//! - `Verbose`: every generation's statistics record is logged at `info`.
//! - `Minimal`: only the start and the end of the run are logged at `info`.
//! - `None`: nothing is logged above `trace`.

use crate::error::{check_probability, GeneticError, Result};
use crate::evaluation::DEFAULT_PARALLEL_THRESHOLD;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    genome_length: usize,
    crossover_probability: f64,
    mutation_probability: f64,
    hall_of_fame_size: usize,
    /// Minimum number of pending evaluations to score in parallel
    parallel_threshold: usize,
}

impl EvolutionOptions {
    /// Creates validated options with `LogLevel::None` and the default
    /// parallel threshold.
    ///
    /// # Errors
    ///
    /// See [`validate`](Self::validate).
    pub fn new(
        num_generations: usize,
        population_size: usize,
        genome_length: usize,
        crossover_probability: f64,
        mutation_probability: f64,
        hall_of_fame_size: usize,
    ) -> Result<Self> {
        let options = Self {
            num_generations,
            log_level: LogLevel::None,
            population_size,
            genome_length,
            crossover_probability,
            mutation_probability,
            hall_of_fame_size,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        };
        options.validate()?;
        Ok(options)
    }

    /// Checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the population size or genome length
    /// is zero, or a probability lies outside `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.genome_length == 0 {
            return Err(GeneticError::Configuration(
                "Genome length cannot be zero".to_string(),
            ));
        }

        check_probability("cxpb", self.crossover_probability)?;
        check_probability("mutpb", self.mutation_probability)?;
        Ok(())
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_genome_length(&self) -> usize {
        self.genome_length
    }

    pub fn get_crossover_probability(&self) -> f64 {
        self.crossover_probability
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_hall_of_fame_size(&self) -> usize {
        self.hall_of_fame_size
    }

    /// Returns the minimum number of pending evaluations to score in parallel.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    pub fn set_crossover_probability(&mut self, crossover_probability: f64) {
        self.crossover_probability = crossover_probability;
    }

    pub fn set_mutation_probability(&mut self, mutation_probability: f64) {
        self.mutation_probability = mutation_probability;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Only the log level and the parallel threshold are optional.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    genome_length: Option<usize>,
    crossover_probability: Option<f64>,
    mutation_probability: Option<f64>,
    hall_of_fame_size: Option<usize>,
    parallel_threshold: Option<usize>,
}

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| GeneticError::Configuration(format!("{} not specified", name)))
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    pub fn genome_length(mut self, value: usize) -> Self {
        self.genome_length = Some(value);
        self
    }

    pub fn crossover_probability(mut self, value: f64) -> Self {
        self.crossover_probability = Some(value);
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    pub fn hall_of_fame_size(mut self, value: usize) -> Self {
        self.hall_of_fame_size = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Builds and validates the `EvolutionOptions` instance.
    pub fn build(self) -> Result<EvolutionOptions> {
        let options = EvolutionOptions {
            num_generations: required(self.num_generations, "Number of generations")?,
            log_level: self.log_level.unwrap_or(LogLevel::None),
            population_size: required(self.population_size, "Population size")?,
            genome_length: required(self.genome_length, "Genome length")?,
            crossover_probability: required(self.crossover_probability, "Crossover probability")?,
            mutation_probability: required(self.mutation_probability, "Mutation probability")?,
            hall_of_fame_size: required(self.hall_of_fame_size, "Hall of fame size")?,
            parallel_threshold: self
                .parallel_threshold
                .unwrap_or(DEFAULT_PARALLEL_THRESHOLD),
        };
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> EvolutionOptionsBuilder {
        EvolutionOptions::builder()
            .num_generations(5)
            .population_size(300)
            .genome_length(30)
            .crossover_probability(0.5)
            .mutation_probability(0.2)
            .hall_of_fame_size(1)
    }

    #[test]
    fn test_builder() {
        let options = complete().parallel_threshold(64).build().unwrap();

        assert_eq!(options.get_num_generations(), 5);
        assert_eq!(options.get_genome_length(), 30);
        assert_eq!(options.get_crossover_probability(), 0.5);
        assert_eq!(options.get_mutation_probability(), 0.2);
        assert_eq!(options.get_hall_of_fame_size(), 1);
        assert_eq!(options.get_log_level(), LogLevel::None);
        assert_eq!(options.get_parallel_threshold(), 64);
    }

    #[test]
    fn test_builder_matches_new() {
        let built = complete().build().unwrap();
        let direct = EvolutionOptions::new(5, 300, 30, 0.5, 0.2, 1).unwrap();
        assert_eq!(built, direct);
    }

    #[test]
    fn test_missing_field() {
        let result = EvolutionOptions::builder()
            .num_generations(5)
            .population_size(10)
            .genome_length(3)
            .crossover_probability(0.5)
            .hall_of_fame_size(1)
            .build();

        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Mutation probability not specified"))
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_population_size() {
        let result = complete().population_size(0).build();

        match result {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Population size cannot be zero"));
            }
            other => panic!("Expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_probabilities_out_of_range() {
        assert!(complete().crossover_probability(1.2).build().is_err());
        assert!(complete().mutation_probability(-0.1).build().is_err());
        assert!(EvolutionOptions::new(5, 10, 3, f64::NAN, 0.1, 1).is_err());
    }

    #[test]
    fn test_setters_are_caught_by_validate() {
        let mut options = complete().build().unwrap();
        options.set_mutation_probability(3.0);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_zero_generations_is_valid() {
        assert!(complete().num_generations(0).build().is_ok());
    }
}
