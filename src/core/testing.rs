//! Scripted random source for unit tests
//!
//! Answers are consumed in call order. Once a queue runs dry the source falls
//! back to `false`, `0` and the low end of the requested range.

use crate::core::traits::RandomSource;
use std::collections::VecDeque;

#[derive(Debug, Default)]
pub struct ScriptedSource {
    chances: VecDeque<bool>,
    indices: VecDeque<u64>,
    fractions: VecDeque<f64>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for `chance`
    pub fn chances(mut self, answers: &[bool]) -> Self {
        self.chances.extend(answers.iter().copied());
        self
    }

    /// Queue answers for `below`
    pub fn indices(mut self, answers: &[u64]) -> Self {
        self.indices.extend(answers.iter().copied());
        self
    }

    /// Queue answers for `uniform`, as a fraction of the requested range
    pub fn fractions(mut self, answers: &[f64]) -> Self {
        self.fractions.extend(answers.iter().copied());
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.chances.is_empty() && self.indices.is_empty() && self.fractions.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }

    fn below(&mut self, upper: u64) -> u64 {
        let index = self.indices.pop_front().unwrap_or(0);
        assert!(index < upper, "scripted index {} out of [0, {})", index, upper);
        index
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let fraction = self.fractions.pop_front().unwrap_or(0.0);
        low + fraction * (high - low)
    }
}
