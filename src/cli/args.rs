use crate::core::{GeneratorConfig, DEFAULT_ITERATIONS};
use clap::Parser;

/// Generate a synthetic stream of payment transactions
#[derive(Parser, Debug)]
#[command(name = "payments-stream-generator")]
#[command(about = "Generate a synthetic CSV stream of payment transactions", long_about = None)]
pub struct CliArgs {
    /// Number of financial transactions to generate
    #[arg(
        short = 'n',
        long = "count",
        value_name = "COUNT",
        default_value_t = DEFAULT_ITERATIONS,
        help = "Number of deposits/withdrawals to generate (default: 1000000)"
    )]
    pub count: u32,

    /// Seed for the random source
    #[arg(
        long = "seed",
        value_name = "SEED",
        help = "Seed for reproducible output (default: random, logged to stderr)"
    )]
    pub seed: Option<u64>,
}

impl CliArgs {
    /// Create a GeneratorConfig from CLI arguments
    ///
    /// Everything the CLI does not expose keeps its default value.
    pub fn to_generator_config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::new(self.count);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::defaults(&["program"], 1_000_000, None)]
    #[case::long_count(&["program", "--count", "500"], 500, None)]
    #[case::short_count(&["program", "-n", "0"], 0, None)]
    #[case::seed_only(&["program", "--seed", "42"], 1_000_000, Some(42))]
    #[case::all_options(&["program", "-n", "10", "--seed", "7"], 10, Some(7))]
    fn test_args_parsing(
        #[case] args: &[&str],
        #[case] expected_count: u32,
        #[case] expected_seed: Option<u64>,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.count, expected_count);
        assert_eq!(parsed.seed, expected_seed);
    }

    #[rstest]
    #[case::with_seed(&["program", "-n", "25", "--seed", "9"], GeneratorConfig::new(25).with_seed(9))]
    #[case::without_seed(&["program", "-n", "25"], GeneratorConfig::new(25))]
    fn test_generator_config_conversion(#[case] args: &[&str], #[case] expected: GeneratorConfig) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_generator_config(), expected);
    }

    #[rstest]
    #[case::negative_count(&["program", "--count", "-1"])]
    #[case::non_numeric_count(&["program", "--count", "many"])]
    #[case::non_numeric_seed(&["program", "--seed", "abc"])]
    #[case::unexpected_positional(&["program", "input.csv"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
