//! Randomness sources
//!
//! Choosers draw indices through [`RandomSource`] so tests can pass a seeded
//! generator and get the same words every run.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces uniformly distributed indices
pub trait RandomSource {
    /// A uniform index in `[0, bound)`
    ///
    /// Callers never pass a zero bound.
    fn index(&mut self, bound: usize) -> usize;
}

impl<R: Rng> RandomSource for R {
    fn index(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

/// A reproducible generator for the given seed
#[must_use]
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A generator seeded from the operating system
#[must_use]
pub fn from_entropy() -> StdRng {
    StdRng::from_os_rng()
}
