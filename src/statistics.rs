//! # Statistics
//!
//! [`Statistics`] holds named aggregation functions and applies them, once per
//! generation, to the fitness values of the population. Each application is
//! appended to a [`Logbook`] as a [`LogRecord`] together with the generation index
//! and the number of evaluations performed in that generation.
//!
//! ## Example
//!
//! ```rust
//! use simplega::statistics::{aggregate, Statistics};
//!
//! let stats = Statistics::new()
//!     .register("avg", aggregate::mean)
//!     .register("min", aggregate::min)
//!     .register("max", aggregate::max);
//!
//! assert_eq!(stats.fields().collect::<Vec<_>>(), vec!["avg", "min", "max"]);
//! ```

use std::fmt;

use crate::error::{GeneticError, OptionExt, Result};
use crate::fitness::Fitness;
use crate::individual::{Gene, Individual};

/// Maps the fitness values of a population to one number.
pub type Aggregator = Box<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Extracts the value that gets aggregated from a fitness.
pub type FitnessKey = Box<dyn Fn(&Fitness) -> f64 + Send + Sync>;

/// Common aggregation functions.
pub mod aggregate {
    pub fn mean(values: &[f64]) -> f64 {
        values.iter().sum::<f64>() / values.len() as f64
    }

    /// Population standard deviation.
    pub fn std_dev(values: &[f64]) -> f64 {
        let mean = mean(values);
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
        variance.sqrt()
    }

    pub fn min(values: &[f64]) -> f64 {
        values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    pub fn max(values: &[f64]) -> f64 {
        values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// NaN for an empty slice, like [`mean`].
    pub fn median(values: &[f64]) -> f64 {
        if values.is_empty() {
            return f64::NAN;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        }
    }
}

/// One generation's worth of statistics.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub gen: usize,
    pub nevals: usize,
    /// Metric values in registration order.
    pub metrics: Vec<(String, f64)>,
}

impl LogRecord {
    pub fn get(&self, metric: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|(name, _)| name == metric)
            .map(|(_, value)| *value)
    }
}

/// Append-only log of [`LogRecord`]s ordered by generation.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Logbook {
    records: Vec<LogRecord>,
}

impl Logbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns an `InvariantViolation` if `record.gen` is lower than the last
    /// record's generation.
    pub fn push(&mut self, record: LogRecord) -> Result<()> {
        if let Some(last) = self.records.last() {
            if record.gen < last.gen {
                return Err(GeneticError::InvariantViolation(format!(
                    "Log record for generation {} arrived after generation {}",
                    record.gen, last.gen
                )));
            }
        }
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&LogRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The values of `metric` across all records, in generation order.
    pub fn select(&self, metric: &str) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|record| record.get(metric))
            .collect()
    }
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value)
    } else {
        format!("{:.4}", value)
    }
}

impl fmt::Display for Logbook {
    /// Tab separated table: `gen`, `nevals`, then one column per metric.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gen\tnevals")?;
        if let Some(first) = self.records.first() {
            for (name, _) in &first.metrics {
                write!(f, "\t{}", name)?;
            }
        }
        for record in &self.records {
            write!(f, "\n{}\t{}", record.gen, record.nevals)?;
            for (_, value) in &record.metrics {
                write!(f, "\t{}", format_value(*value))?;
            }
        }
        Ok(())
    }
}

/// Named aggregations over per-generation fitness values, with the log they
/// produce.
pub struct Statistics {
    key: FitnessKey,
    fields: Vec<(String, Aggregator)>,
    logbook: Logbook,
}

impl Statistics {
    /// Statistics over the first objective value of each fitness.
    pub fn new() -> Self {
        Self {
            key: Box::new(Fitness::value),
            fields: Vec::new(),
            logbook: Logbook::new(),
        }
    }

    /// Replaces the value extracted from each fitness, e.g.
    /// `|f| f.score()` to aggregate weighted scores.
    pub fn with_key<K>(mut self, key: K) -> Self
    where
        K: Fn(&Fitness) -> f64 + Send + Sync + 'static,
    {
        self.key = Box::new(key);
        self
    }

    /// Registers an aggregation under `name`. Registering an existing name
    /// replaces its function but keeps its column position.
    pub fn register<F>(mut self, name: impl Into<String>, aggregator: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        let name = name.into();
        let aggregator: Aggregator = Box::new(aggregator);
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some(field) => field.1 = aggregator,
            None => self.fields.push((name, aggregator)),
        }
        self
    }

    /// Registered metric names, in registration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Computes every registered metric over `population` without logging.
    ///
    /// # Errors
    ///
    /// Returns `EmptyPopulation` for an empty population and an
    /// `InvariantViolation` if any fitness is unset.
    pub fn compile<G: Gene>(&self, population: &[Individual<G>]) -> Result<Vec<(String, f64)>> {
        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        let values = population
            .iter()
            .map(|individual| individual.expect_fitness().map(|f| (self.key)(f)))
            .collect::<Result<Vec<f64>>>()?;

        Ok(self
            .fields
            .iter()
            .map(|(name, aggregator)| (name.clone(), aggregator(&values)))
            .collect())
    }

    /// Compiles the metrics of `population` and appends them to the logbook.
    pub fn record<G: Gene>(
        &mut self,
        gen: usize,
        population: &[Individual<G>],
        nevals: usize,
    ) -> Result<&LogRecord> {
        let metrics = self.compile(population)?;
        self.logbook.push(LogRecord {
            gen,
            nevals,
            metrics,
        })?;
        self.logbook.last().ok_or_else_genetic(|| {
            GeneticError::InvariantViolation("Logbook is empty after recording".to_string())
        })
    }

    pub fn logbook(&self) -> &Logbook {
        &self.logbook
    }

    pub fn into_logbook(self) -> Logbook {
        self.logbook
    }
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Statistics")
            .field("fields", &self.fields().collect::<Vec<_>>())
            .field("logbook", &self.logbook)
            .finish()
    }
}
