pub mod caching;
pub mod error;
pub mod evaluation;
pub mod evolution;
pub mod fitness;
pub mod hall_of_fame;
pub mod individual;
pub mod rng;
pub mod selection;
pub mod statistics;
pub mod variation;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evaluation::{Challenge, Evaluator};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult};
pub use fitness::{Fitness, Weights};
pub use hall_of_fame::HallOfFame;
pub use individual::{Gene, Individual};
pub use rng::RandomNumberGenerator;
pub use statistics::{Logbook, Statistics};
