//! Core traits for the generator
//!
//! Every random decision the generator makes goes through [`RandomSource`], so a
//! seeded source can make a run reproducible and a scripted source can force
//! specific branches under test.

/// Source of the random draws used by the generator
///
/// Implementations must honour the documented ranges; the generator relies on
/// them to keep the stream referentially consistent.
pub trait RandomSource {
    /// Bernoulli trial: returns `true` with the given probability (0.0 to 1.0)
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniform integer in `[0, upper)`
    ///
    /// Callers guarantee `upper > 0`.
    fn below(&mut self, upper: u64) -> u64;

    /// Uniform real number in `[low, high)`
    ///
    /// Callers guarantee `low < high`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn chance(&mut self, probability: f64) -> bool {
        (**self).chance(probability)
    }

    fn below(&mut self, upper: u64) -> u64 {
        (**self).below(upper)
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        (**self).uniform(low, high)
    }
}
