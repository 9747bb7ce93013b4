/*!
 * Injectable randomness for exercise synthesis.
 *
 * Every random decision in the pipeline (sub-strategy selection, table
 * picks, option shuffling) is routed through a single `RandomSource`
 * passed into the orchestrator. Tests inject a seeded or scripted source
 * to make generation fully deterministic.
 */

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of randomness for the generation pipeline
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`; `len` must be greater than zero
    fn index(&mut self, len: usize) -> usize;
}

impl dyn RandomSource + '_ {
    /// Pick a uniformly random element, or `None` for an empty slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.index(items.len())])
        }
    }

    /// Fisher-Yates shuffle in place
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.index(i + 1);
            items.swap(i, j);
        }
    }
}

/// Deterministic source seeded from a `u64`, for tests and replay
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a seeded source
    pub fn new(seed: u64) -> Self {
        SeededSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Source backed by the thread-local RNG, for normal operation
pub struct SystemSource {
    rng: ThreadRng,
}

impl SystemSource {
    /// Create a system-backed source
    pub fn new() -> Self {
        SystemSource { rng: rand::rng() }
    }
}

impl Default for SystemSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}
