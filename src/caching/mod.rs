//! # Caching Module
//!
//! The evaluator already memoizes fitness on each individual. This module adds a
//! second, genome-keyed layer for expensive objectives: genetically identical
//! individuals that show up in different generations (clones of a tournament
//! winner that escaped variation, re-discovered genomes) are scored once.
//!
//! Wrapping a challenge does not change what the evaluator counts as an
//! evaluation, only how often the wrapped objective actually runs.

use std::collections::HashMap;
use std::hash::Hash;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::Result;
use crate::evaluation::Challenge;

type ScoreCache<G> = HashMap<Vec<G>, Vec<f64>>;

/// A wrapper around a challenge that caches objective values by genome.
///
/// Clones share the same cache.
#[derive(Debug, Clone)]
pub struct CachedChallenge<G, C>
where
    G: Eq + Hash,
{
    challenge: C,
    cache: Arc<Mutex<ScoreCache<G>>>,
    _marker: PhantomData<fn(&[G])>,
}

impl<G, C> CachedChallenge<G, C>
where
    G: Clone + Eq + Hash + Send + Sync,
    C: Challenge<G>,
{
    /// Creates a new cached challenge wrapping the given challenge.
    pub fn new(challenge: C) -> Self {
        Self::with_cache(challenge, HashMap::new())
    }

    /// Creates a new cached challenge with a pre-populated cache.
    pub fn with_cache(challenge: C, cache: ScoreCache<G>) -> Self {
        Self {
            challenge,
            cache: Arc::new(Mutex::new(cache)),
            _marker: PhantomData,
        }
    }

    /// Returns a reference to the wrapped challenge.
    pub fn inner(&self) -> &C {
        &self.challenge
    }

    /// Returns the number of cached genomes.
    pub fn cache_size(&self) -> usize {
        self.lock().len()
    }

    pub fn clear_cache(&self) {
        self.lock().clear();
    }

    /// Returns a copy of the cache.
    pub fn get_cache(&self) -> ScoreCache<G> {
        self.lock().clone()
    }

    // A panic while holding the lock cannot leave a half-written entry behind,
    // so a poisoned cache is still usable.
    fn lock(&self) -> MutexGuard<'_, ScoreCache<G>> {
        self.cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<G, C> Challenge<G> for CachedChallenge<G, C>
where
    G: Clone + Eq + Hash + Send + Sync,
    C: Challenge<G>,
{
    fn score(&self, genes: &[G]) -> Result<Vec<f64>> {
        if let Some(values) = self.lock().get(genes) {
            return Ok(values.clone());
        }

        // Scored outside the lock so parallel evaluation does not serialize on
        // the objective. Two threads racing on one genome both compute the same
        // pure result.
        let values = self.challenge.score(genes)?;
        self.lock().insert(genes.to_vec(), values.clone());

        Ok(values)
    }
}

/// Extension trait for wrapping a challenge with a genome-keyed cache.
pub trait CachingChallenge<G>: Challenge<G> + Sized
where
    G: Clone + Eq + Hash + Send + Sync,
{
    fn with_global_cache(self) -> CachedChallenge<G, Self> {
        CachedChallenge::new(self)
    }
}

impl<G, C> CachingChallenge<G> for C
where
    G: Clone + Eq + Hash + Send + Sync,
    C: Challenge<G>,
{
}
