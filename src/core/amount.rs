//! Amount synthesis for financial events

use crate::core::traits::RandomSource;

/// Draws amounts uniformly from a half-open range
///
/// No rounding or currency quantization is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountSynthesizer {
    min: f64,
    max: f64,
}

impl AmountSynthesizer {
    /// Create a synthesizer over `[min, max)`
    pub fn new(min: f64, max: f64) -> Self {
        AmountSynthesizer { min, max }
    }

    /// Draw one amount in `[min, max)`
    pub fn next_amount<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.uniform(self.min, self.max)
    }
}
