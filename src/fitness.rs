//! # Fitness
//!
//! A fitness is a tuple of one or more objective values. The sign convention and
//! arity of that tuple are fixed once by a [`Weights`] vector: a positive weight
//! maximizes its component, a negative weight minimizes it.
//!
//! Two fitnesses are compared through their weighted sum `Σ wᵢ·vᵢ`, which for the
//! common single objective case with weight `+1` is plain scalar maximization.
//!
//! ## Example
//!
//! ```rust
//! use simplega::fitness::Weights;
//!
//! let weights = Weights::new(vec![1.0, -0.5]).unwrap();
//! let a = weights.fitness(vec![10.0, 2.0]).unwrap(); // 10 - 1 = 9
//! let b = weights.fitness(vec![9.0, 0.0]).unwrap(); // 9
//! let c = weights.fitness(vec![11.0, 8.0]).unwrap(); // 11 - 4 = 7
//!
//! assert!(!a.is_better_than(&b));
//! assert!(a.is_better_than(&c));
//! ```

use std::cmp::Ordering;

use crate::error::{GeneticError, Result};

/// The weights declared once at setup. Their count is the arity every
/// objective result must have.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Weights {
    weights: Vec<f64>,
}

impl Weights {
    /// Creates a weights vector.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if the vector is empty or holds a zero,
    /// NaN or infinite weight.
    pub fn new(weights: Vec<f64>) -> Result<Self> {
        if weights.is_empty() {
            return Err(GeneticError::Configuration(
                "At least one fitness weight is required".to_string(),
            ));
        }

        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w == 0.0) {
            return Err(GeneticError::Configuration(format!(
                "Fitness weights must be finite and non-zero, got {}",
                bad
            )));
        }

        Ok(Self { weights })
    }

    /// Single objective, maximized.
    pub fn maximize() -> Self {
        Self { weights: vec![1.0] }
    }

    /// Single objective, minimized.
    pub fn minimize() -> Self {
        Self {
            weights: vec![-1.0],
        }
    }

    /// Number of objective components.
    pub fn arity(&self) -> usize {
        self.weights.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Builds a [`Fitness`] from raw objective values.
    ///
    /// # Errors
    ///
    /// Returns an `Evaluation` error if the number of values does not match the
    /// weights or if any value is NaN or infinite.
    pub fn fitness(&self, values: Vec<f64>) -> Result<Fitness> {
        if values.len() != self.weights.len() {
            return Err(GeneticError::Evaluation(format!(
                "Objective returned {} value(s), but {} weight(s) were declared",
                values.len(),
                self.weights.len()
            )));
        }

        if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
            return Err(GeneticError::Evaluation(format!(
                "Non-finite fitness value encountered: {}",
                bad
            )));
        }

        let score = values
            .iter()
            .zip(&self.weights)
            .map(|(value, weight)| value * weight)
            .sum();

        Ok(Fitness { values, score })
    }
}

/// An immutable, evaluated fitness.
///
/// Only [`Weights::fitness`] creates one, so the values are always finite and
/// match the declared arity. Deserialization checks that the values are
/// non-empty and finite and that the score is finite.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "FitnessRecord"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Fitness {
    values: Vec<f64>,
    score: f64,
}

/// Unchecked wire form of a [`Fitness`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct FitnessRecord {
    values: Vec<f64>,
    score: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<FitnessRecord> for Fitness {
    type Error = GeneticError;

    fn try_from(record: FitnessRecord) -> Result<Self> {
        if record.values.is_empty() {
            return Err(GeneticError::Validation(
                "Fitness must hold at least one value".to_string(),
            ));
        }

        if !record.score.is_finite() || record.values.iter().any(|v| !v.is_finite()) {
            return Err(GeneticError::Validation(format!(
                "Fitness values {:?} with score {} are not all finite",
                record.values, record.score
            )));
        }

        Ok(Self {
            values: record.values,
            score: record.score,
        })
    }
}

impl Fitness {
    /// The raw objective values, in declaration order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The first objective value. This is the whole fitness for single
    /// objective problems.
    pub fn value(&self) -> f64 {
        self.values[0]
    }

    /// The weighted sum used for comparisons.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Orders two fitnesses, `Greater` meaning `self` is better.
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        self.score.total_cmp(&other.score)
    }

    pub fn is_better_than(&self, other: &Self) -> bool {
        self.cmp_score(other) == Ordering::Greater
    }
}
