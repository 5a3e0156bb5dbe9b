//! Payments Stream Generator CLI
//!
//! Writes a synthetic transaction stream in CSV format to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run > transactions.csv
//! cargo run -- --count 10000 > transactions.csv
//! cargo run -- --count 10000 --seed 42 > transactions.csv
//! RUST_LOG=debug cargo run -- -n 100 > transactions.csv
//! ```
//!
//! Logs go to stderr so stdout carries only the stream.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: The stream could not be written (closed pipe, disk full, etc.)

use payments_stream_generator::cli;
use payments_stream_generator::pipeline;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,payments_stream_generator=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    let config = args.to_generator_config();

    let stdout = std::io::stdout();
    let mut output = stdout.lock();
    if let Err(e) = pipeline::generate_to_writer(&config, &mut output) {
        error!(error = %e, "Failed to generate stream");
        process::exit(1);
    }
}
