pub mod best;
pub mod random;
pub mod selection_strategy;
pub mod tournament;

pub use best::BestSelection;
pub use random::RandomSelection;
pub use selection_strategy::SelectionStrategy;
pub use tournament::TournamentSelection;
