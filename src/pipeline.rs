//! Generation pipeline
//!
//! Orchestrates one complete run, delegating:
//! - Random source construction to `SeededSource`
//! - Event generation to `StreamGenerator`
//! - CSV encoding to `csv_format::encode_stream`
//!
//! The whole stream is generated and encoded in memory first, then written to
//! the output in a single call. There is no incremental flushing.

use crate::core::{GenerationReport, GeneratorConfig, SeededSource, StreamGenerator};
use crate::io::encode_stream;
use crate::types::GeneratorError;
use std::io::Write;
use tracing::{debug, info};

/// Generate a stream and write it to `output`
///
/// When the config carries no seed, a random one is drawn and logged so the
/// run can be replayed with `--seed`.
///
/// # Arguments
///
/// * `config` - Run configuration
/// * `output` - Destination for the encoded stream (stdout in the CLI)
///
/// # Returns
///
/// * `Ok(GenerationReport)` - Counts of what was emitted
/// * `Err(GeneratorError)` - If the config is invalid, or encoding or writing failed
pub fn generate_to_writer(
    config: &GeneratorConfig,
    output: &mut dyn Write,
) -> Result<GenerationReport, GeneratorError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(iterations = config.iterations, seed, "Generating event stream");

    let generator = StreamGenerator::new(config, SeededSource::from_seed(seed))?;
    let stream = generator.run(config.iterations);

    let report = stream.report;
    info!(
        deposits = report.deposits,
        withdrawals = report.withdrawals,
        disputes = report.disputes,
        resolves = report.resolves,
        chargebacks = report.chargebacks,
        max_client_id = report.max_client_id,
        open_disputes = report.open_disputes,
        "Generation complete"
    );

    let encoded = encode_stream(&stream.events)?;
    output.write_all(&encoded)?;
    output.flush()?;
    debug!(bytes = encoded.len(), "Stream written");

    Ok(report)
}
