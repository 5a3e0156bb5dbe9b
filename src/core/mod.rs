//! Core generator module
//!
//! This module contains the stream generation components:
//! - `traits` - The random source abstraction every decision goes through
//! - `random` - Seeded ChaCha8-backed random source
//! - `config` - Generator configuration and validation
//! - `selector` - Deposit/withdrawal selection
//! - `population` - Client population growth model
//! - `amount` - Amount synthesis
//! - `dispute_tracker` - Open dispute set and lifecycle transitions
//! - `generator` - The generation loop

pub mod amount;
pub mod config;
pub mod dispute_tracker;
pub mod generator;
pub mod population;
pub mod random;
pub mod selector;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;

pub use amount::AmountSynthesizer;
pub use config::{GeneratorConfig, DEFAULT_ITERATIONS};
pub use dispute_tracker::{DisputeLifecycleTracker, OpenDisputeSet};
pub use generator::{GeneratedStream, GenerationReport, StreamGenerator};
pub use population::ClientPopulation;
pub use random::SeededSource;
pub use traits::RandomSource;
