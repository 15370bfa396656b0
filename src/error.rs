//! # Error Types
//!
//! This module defines the error type shared by every component of the engine.
//! All failures abort the run: no operator swallows an error and retries.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use simplega::error::{GeneticError, Result};
//!
//! fn check_probability(p: f64) -> Result<f64> {
//!     if !(0.0..=1.0).contains(&p) {
//!         return Err(GeneticError::Configuration(format!(
//!             "probability {} is outside [0, 1]",
//!             p
//!         )));
//!     }
//!     Ok(p)
//! }
//!
//! assert!(check_probability(0.5).is_ok());
//! assert!(check_probability(1.5).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use simplega::error::{GeneticError, OptionExt};
//!
//! fn first_candidate(candidates: &[i32]) -> simplega::error::Result<i32> {
//!     candidates.first().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while running the evolutionary loop.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// Structural mismatch between individuals, e.g. crossover parents with
    /// different genome lengths.
    #[error("Validation error: {0}")]
    Validation(String),

    /// An internal invariant was observed broken, e.g. an unset fitness was
    /// read by selection or a variation operator left a stale fitness behind.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    /// The objective function failed or returned a malformed fitness tuple.
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use simplega::error::{GeneticError, OptionExt};
///
/// let missing: Option<u8> = None;
/// let err = missing.ok_or_else_genetic(|| GeneticError::EmptyPopulation);
/// assert_eq!(err, Err(GeneticError::EmptyPopulation));
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}

/// Checks that `value` is a probability in `[0, 1]`.
///
/// `name` is used in the error message, so pass the parameter name the
/// caller configured (`"cxpb"`, `"indpb"`, ...).
pub fn check_probability(name: &str, value: f64) -> Result<f64> {
    if value.is_nan() || !(0.0..=1.0).contains(&value) {
        return Err(GeneticError::Configuration(format!(
            "{} must be within [0, 1], got {}",
            name, value
        )));
    }
    Ok(value)
}
