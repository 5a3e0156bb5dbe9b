//! Generator configuration
//!
//! The defaults reproduce the reference stream shape: one million iterations,
//! 75% new clients, 10% dispute/resolve/chargeback trials and amounts in
//! `[100, 200)`.

use crate::types::GeneratorError;

/// Default number of loop iterations (financial events)
pub const DEFAULT_ITERATIONS: u32 = 1_000_000;

/// Configuration for one generator run
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Number of loop iterations; one financial event each
    pub iterations: u32,
    /// Seed for the random source (a random seed is drawn when `None`)
    pub seed: Option<u64>,
    /// Probability that a financial event introduces a new client
    pub new_client_probability: f64,
    /// Probability of disputing the current transaction
    pub dispute_probability: f64,
    /// Probability of resolving an open dispute
    pub resolve_probability: f64,
    /// Probability of charging back an open dispute
    pub chargeback_probability: f64,
    /// Inclusive lower bound for amounts
    pub amount_min: f64,
    /// Exclusive upper bound for amounts
    pub amount_max: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            new_client_probability: 0.75,
            dispute_probability: 0.1,
            resolve_probability: 0.1,
            chargeback_probability: 0.1,
            amount_min: 100.0,
            amount_max: 200.0,
        }
    }
}

impl GeneratorConfig {
    /// Create a default config with a custom iteration count
    pub fn new(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_new_client_probability(mut self, probability: f64) -> Self {
        self.new_client_probability = probability;
        self
    }

    /// Set the dispute, resolve and chargeback probabilities
    pub fn with_lifecycle_probabilities(
        mut self,
        dispute: f64,
        resolve: f64,
        chargeback: f64,
    ) -> Self {
        self.dispute_probability = dispute;
        self.resolve_probability = resolve;
        self.chargeback_probability = chargeback;
        self
    }

    pub fn with_amount_range(mut self, min: f64, max: f64) -> Self {
        self.amount_min = min;
        self.amount_max = max;
        self
    }

    /// Check probabilities and the amount range
    ///
    /// The iteration count is not validated; zero is a valid run that emits
    /// only the header.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if:
    /// - A probability is outside `[0, 1]` or NaN
    /// - An amount bound is not finite
    /// - `amount_min >= amount_max`
    pub fn validate(&self) -> Result<(), GeneratorError> {
        let probabilities = [
            ("new_client_probability", self.new_client_probability),
            ("dispute_probability", self.dispute_probability),
            ("resolve_probability", self.resolve_probability),
            ("chargeback_probability", self.chargeback_probability),
        ];
        for (field, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(GeneratorError::invalid_config(
                    field,
                    &format!("{} is not within [0, 1]", value),
                ));
            }
        }

        if !self.amount_min.is_finite() || !self.amount_max.is_finite() {
            return Err(GeneratorError::invalid_config(
                "amount_range",
                "bounds must be finite",
            ));
        }
        if self.amount_min >= self.amount_max {
            return Err(GeneratorError::invalid_config(
                "amount_range",
                &format!("[{}, {}) is empty", self.amount_min, self.amount_max),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_matches_reference_shape() {
        let config = GeneratorConfig::default();
        assert_eq!(config.iterations, 1_000_000);
        assert_eq!(config.seed, None);
        assert_eq!(config.new_client_probability, 0.75);
        assert_eq!(config.dispute_probability, 0.1);
        assert_eq!(config.resolve_probability, 0.1);
        assert_eq!(config.chargeback_probability, 0.1);
        assert_eq!((config.amount_min, config.amount_max), (100.0, 200.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_iterations_is_valid() {
        assert!(GeneratorConfig::new(0).validate().is_ok());
    }

    #[rstest]
    #[case::new_client_above_one(GeneratorConfig::default().with_new_client_probability(1.5), "new_client_probability")]
    #[case::negative_dispute(GeneratorConfig::default().with_lifecycle_probabilities(-0.1, 0.1, 0.1), "dispute_probability")]
    #[case::nan_resolve(GeneratorConfig::default().with_lifecycle_probabilities(0.1, f64::NAN, 0.1), "resolve_probability")]
    #[case::chargeback_above_one(GeneratorConfig::default().with_lifecycle_probabilities(0.1, 0.1, 2.0), "chargeback_probability")]
    #[case::empty_range(GeneratorConfig::default().with_amount_range(200.0, 200.0), "amount_range")]
    #[case::inverted_range(GeneratorConfig::default().with_amount_range(200.0, 100.0), "amount_range")]
    #[case::infinite_bound(GeneratorConfig::default().with_amount_range(100.0, f64::INFINITY), "amount_range")]
    fn test_validate_rejects(#[case] config: GeneratorConfig, #[case] expected_field: &str) {
        match config.validate() {
            Err(GeneratorError::InvalidConfig { field, .. }) => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidConfig for {}, got {:?}", expected_field, other),
        }
    }

    #[rstest]
    #[case::certain_events(GeneratorConfig::default().with_lifecycle_probabilities(1.0, 1.0, 1.0))]
    #[case::no_new_clients(GeneratorConfig::default().with_new_client_probability(0.0))]
    fn test_validate_accepts_boundaries(#[case] config: GeneratorConfig) {
        assert!(config.validate().is_ok());
    }
}
