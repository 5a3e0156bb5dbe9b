//! Benchmark suite for stream generation
//!
//! Measures generation plus CSV encoding using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Three sizes are measured: 10,000, 100,000 and 1,000,000 iterations (the
//! default run size). Seeds are fixed so every sample produces the same stream.

use payments_stream_generator::core::{GeneratorConfig, SeededSource, StreamGenerator};
use payments_stream_generator::io::encode_stream;
use payments_stream_generator::pipeline::generate_to_writer;

fn main() {
    divan::main();
}

/// Generation loop only, without encoding
#[divan::bench(args = [10_000, 100_000, 1_000_000])]
fn generate_events(iterations: u32) {
    let config = GeneratorConfig::new(iterations);
    let generator = StreamGenerator::new(&config, SeededSource::from_seed(42))
        .expect("Invalid config");

    divan::black_box(generator.run(iterations));
}

/// Generation plus CSV encoding into memory
#[divan::bench(args = [10_000, 100_000, 1_000_000])]
fn generate_and_encode(iterations: u32) {
    let config = GeneratorConfig::new(iterations);
    let stream = StreamGenerator::new(&config, SeededSource::from_seed(42))
        .expect("Invalid config")
        .run(iterations);

    divan::black_box(encode_stream(&stream.events).expect("Encoding failed"));
}

/// Full pipeline into an in-memory sink
#[divan::bench(args = [10_000, 100_000])]
fn full_pipeline(iterations: u32) {
    let config = GeneratorConfig::new(iterations).with_seed(42);
    let mut output = Vec::new();

    generate_to_writer(&config, &mut output).expect("Generation failed");
    divan::black_box(output);
}
