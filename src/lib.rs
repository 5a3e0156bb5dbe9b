//! Payments Stream Generator Library
//! # Overview
//!
//! This library synthesizes a plausible CSV stream of payment transactions for
//! exercising a downstream transaction-processing engine. The stream is
//! referentially consistent: disputes only reference transactions already
//! emitted, and resolves/chargebacks only reference disputes still open.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (events, identifiers, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Generator components:
//!   - [`core::selector`] - Deposit/withdrawal selection
//!   - [`core::population`] - Client population growth
//!   - [`core::amount`] - Amount synthesis
//!   - [`core::dispute_tracker`] - Open dispute set and lifecycle transitions
//!   - [`core::generator`] - The generation loop
//! - [`io`] - CSV encoding of the stream
//! - [`pipeline`] - Generate, encode and write in one call
//!
//! # Event Types
//!
//! - **Deposit** / **Withdrawal**: `kind,client,tx,amount` with amount in `[100, 200)`
//! - **Dispute**: opens a dispute on the current iteration's transaction
//! - **Resolve** / **Chargeback**: close a uniformly chosen open dispute
//!
//! # Reproducibility
//!
//! Every random decision goes through [`core::RandomSource`]. Two runs with the
//! same seed and iteration count produce byte-identical output.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{
    GenerationReport, GeneratorConfig, RandomSource, SeededSource, StreamGenerator,
};
pub use io::encode_stream;
pub use pipeline::generate_to_writer;
pub use types::{ClientId, EventKind, GeneratorError, StreamEvent, TransactionId};
