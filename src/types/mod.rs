//! Types module
//!
//! Contains core data structures used throughout the generator.
//! This module organizes types into logical submodules:
//! - `event`: Event kinds, identifiers and generated event records
//! - `error`: Error types for the stream generator

pub mod error;
pub mod event;

pub use error::GeneratorError;
pub use event::{ClientId, EventKind, StreamEvent, TransactionId};
