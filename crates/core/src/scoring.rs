//! Sources of synthetic scores.
//!
//! Handlers never touch an RNG directly; they go through a [`Scorer`] so a
//! seeded source can replace the thread-local one for reproducible runs.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::{Arc, Mutex, PoisonError};

pub trait Scorer: Send + Sync {
    /// Uniform draw in `[low, high]`.
    fn uniform(&self, low: f64, high: f64) -> f64;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&self, len: usize) -> usize;

    fn unit(&self) -> f64 {
        self.uniform(0.0, 1.0)
    }
}

/// Draws from the calling thread's RNG; nothing is shared between requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngScorer;

impl Scorer for ThreadRngScorer {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        rand::thread_rng().gen_range(low..=high)
    }

    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic scorer for tests and demos. Concurrent requests interleave
/// draws, so only the overall sequence is reproducible.
#[derive(Debug)]
pub struct SeededScorer {
    rng: Mutex<StdRng>,
}

impl SeededScorer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Scorer for SeededScorer {
    fn uniform(&self, low: f64, high: f64) -> f64 {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(low..=high)
    }

    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..len)
    }
}

pub fn scorer_for(seed: Option<u64>) -> Arc<dyn Scorer> {
    match seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded scorer");
            Arc::new(SeededScorer::new(seed))
        }
        None => Arc::new(ThreadRngScorer),
    }
}
