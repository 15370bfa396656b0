//! # Hall of Fame
//!
//! A bounded archive of the best individuals ever seen, independent of population
//! turnover. Entries are owned snapshots, so later variation of the live
//! population can never rewrite history.
//!
//! Ordering rules:
//! - entries are kept fittest first;
//! - a newcomer only displaces the worst entry of a full archive if it is
//!   strictly better, and ranks after existing entries of equal fitness, so ties
//!   are broken by first-seen;
//! - a newcomer whose genes equal an archived entry's is skipped.

use crate::error::Result;
use crate::individual::{Gene, Individual};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct HallOfFame<G> {
    capacity: usize,
    items: Vec<Individual<G>>,
}

impl<G: Gene> HallOfFame<G> {
    /// Creates an empty hall of fame holding at most `capacity` individuals.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Merges the individuals of `population` into the archive.
    ///
    /// # Errors
    ///
    /// Returns an `InvariantViolation` if any individual has an unset fitness.
    /// The archive is left untouched in that case.
    pub fn update(&mut self, population: &[Individual<G>]) -> Result<()> {
        for individual in population {
            individual.expect_fitness()?;
        }

        for individual in population {
            self.offer(individual)?;
        }
        Ok(())
    }

    fn offer(&mut self, candidate: &Individual<G>) -> Result<()> {
        if self.capacity == 0 {
            return Ok(());
        }

        let fitness = candidate.expect_fitness()?;

        if self.items.len() >= self.capacity {
            let worst = self.items[self.items.len() - 1].expect_fitness()?;
            if !fitness.is_better_than(worst) {
                return Ok(());
            }
        }

        if self
            .items
            .iter()
            .any(|item| item.genes() == candidate.genes())
        {
            return Ok(());
        }

        if self.items.len() >= self.capacity {
            self.items.pop();
        }

        // First position holding a strictly worse entry.
        let position = self
            .items
            .iter()
            .position(|item| {
                item.fitness()
                    .map_or(true, |existing| fitness.is_better_than(existing))
            })
            .unwrap_or(self.items.len());
        self.items.insert(position, candidate.clone());
        Ok(())
    }

    /// The fittest individual ever seen.
    pub fn best(&self) -> Option<&Individual<G>> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual<G>> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Individual<G>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<'a, G: Gene> IntoIterator for &'a HallOfFame<G> {
    type Item = &'a Individual<G>;
    type IntoIter = std::slice::Iter<'a, Individual<G>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
