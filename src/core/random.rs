//! Seeded random source backed by ChaCha8
//!
//! Two sources built from the same seed produce the same sequence of draws,
//! which makes two generator runs with the same seed and iteration count
//! byte-identical.

use crate::core::traits::RandomSource;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic random source
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    /// Create a source from a 64-bit seed
    pub fn from_seed(seed: u64) -> Self {
        SeededSource {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability)
    }

    fn below(&mut self, upper: u64) -> u64 {
        self.rng.gen_range(0..upper)
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..high)
    }
}
