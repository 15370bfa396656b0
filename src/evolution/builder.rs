use std::marker::PhantomData;

use crate::{
    error::{GeneticError, Result},
    evaluation::{Challenge, Evaluator},
    fitness::Weights,
    individual::Gene,
    selection::SelectionStrategy,
    variation::{Crossover, Mutation},
};

use super::EvolutionLauncher;

/// Assembles an [`EvolutionLauncher`] from its parts.
///
/// Every part is required; `build` names the first one missing.
///
/// # Example
///
/// ```rust
/// use simplega::evolution::EvolutionLauncherBuilder;
/// use simplega::fitness::Weights;
/// use simplega::selection::TournamentSelection;
/// use simplega::variation::{FlipBitMutation, TwoPointCrossover};
///
/// let launcher = EvolutionLauncherBuilder::new()
///     .with_challenge(|genes: &[bool]| vec![genes.iter().filter(|g| **g).count() as f64])
///     .with_weights(Weights::maximize())
///     .with_selection_strategy(TournamentSelection::new(3).unwrap())
///     .with_crossover(TwoPointCrossover)
///     .with_mutation(FlipBitMutation::new(0.05).unwrap())
///     .build();
///
/// assert!(launcher.is_ok());
/// ```
pub struct EvolutionLauncherBuilder<G, C, S, X, M> {
    challenge: Option<C>,
    weights: Option<Weights>,
    selection_strategy: Option<S>,
    crossover: Option<X>,
    mutation: Option<M>,
    _marker: PhantomData<fn(&[G])>,
}

impl<G, C, S, X, M> EvolutionLauncherBuilder<G, C, S, X, M>
where
    G: Gene,
    C: Challenge<G>,
    S: SelectionStrategy<G>,
    X: Crossover<G>,
    M: Mutation<G>,
{
    pub fn new() -> Self {
        Self {
            challenge: None,
            weights: None,
            selection_strategy: None,
            crossover: None,
            mutation: None,
            _marker: PhantomData,
        }
    }

    pub fn with_challenge(mut self, challenge: C) -> Self {
        self.challenge = Some(challenge);
        self
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = Some(weights);
        self
    }

    pub fn with_selection_strategy(mut self, selection_strategy: S) -> Self {
        self.selection_strategy = Some(selection_strategy);
        self
    }

    pub fn with_crossover(mut self, crossover: X) -> Self {
        self.crossover = Some(crossover);
        self
    }

    pub fn with_mutation(mut self, mutation: M) -> Self {
        self.mutation = Some(mutation);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<G, C, S, X, M>> {
        let challenge = self
            .challenge
            .ok_or_else(|| GeneticError::Configuration("Challenge not specified".to_string()))?;

        let weights = self.weights.ok_or_else(|| {
            GeneticError::Configuration("Fitness weights not specified".to_string())
        })?;

        let selection_strategy = self.selection_strategy.ok_or_else(|| {
            GeneticError::Configuration("Selection strategy not specified".to_string())
        })?;

        let crossover = self
            .crossover
            .ok_or_else(|| GeneticError::Configuration("Crossover not specified".to_string()))?;

        let mutation = self
            .mutation
            .ok_or_else(|| GeneticError::Configuration("Mutation not specified".to_string()))?;

        Ok(EvolutionLauncher::new(
            Evaluator::new(challenge, weights),
            selection_strategy,
            crossover,
            mutation,
        ))
    }
}

impl<G, C, S, X, M> Default for EvolutionLauncherBuilder<G, C, S, X, M>
where
    G: Gene,
    C: Challenge<G>,
    S: SelectionStrategy<G>,
    X: Crossover<G>,
    M: Mutation<G>,
{
    fn default() -> Self {
        Self::new()
    }
}
