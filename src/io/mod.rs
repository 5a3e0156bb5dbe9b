//! I/O module
//!
//! Handles CSV encoding of the generated stream.
//!
//! # Components
//!
//! - `csv_format` - Record encoding and whole-stream serialization

pub mod csv_format;

pub use csv_format::{encode_stream, write_event, STREAM_HEADER};
