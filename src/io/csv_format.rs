//! CSV format handling for the generated event stream
//!
//! This module centralizes the wire format:
//! - The fixed header line `type,client,tx,amount`
//! - Financial events as `kind,client,tx,amount` (4 fields)
//! - Lifecycle events as `kind,client,tx` (3 fields, no trailing comma)
//!
//! The field count differs by kind, so the writer runs in flexible mode.
//! Amounts are written at full f64 precision with no rounding.
//!
//! All functions are pure (no I/O beyond the supplied writer) for easy testing.

use crate::types::{GeneratorError, StreamEvent};
use csv::{Writer, WriterBuilder};
use std::io::Write;

/// Header line of every generated stream
pub const STREAM_HEADER: [&str; 4] = ["type", "client", "tx", "amount"];

/// Encode one event as a CSV record
///
/// The event kind is serialized through serde as its lowercase name.
///
/// # Arguments
///
/// * `writer` - A flexible CSV writer
/// * `event` - The event to encode
///
/// # Returns
///
/// * `Ok(())` if the record was written
/// * `Err(GeneratorError)` if the CSV writer failed
pub fn write_event<W: Write>(
    writer: &mut Writer<W>,
    event: &StreamEvent,
) -> Result<(), GeneratorError> {
    match event.amount {
        Some(amount) => writer.serialize((event.kind, event.client, event.tx, amount))?,
        None => writer.serialize((event.kind, event.client, event.tx))?,
    }
    Ok(())
}

/// Encode a whole stream into an in-memory buffer
///
/// Writes the header followed by one line per event in emission order,
/// each terminated by `\n`. An empty event slice yields just the header.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - The encoded stream, ready to be written in one go
/// * `Err(GeneratorError)` - If encoding failed
pub fn encode_stream(events: &[StreamEvent]) -> Result<Vec<u8>, GeneratorError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_writer(Vec::new());

    writer.write_record(STREAM_HEADER)?;
    for event in events {
        write_event(&mut writer, event)?;
    }

    writer
        .into_inner()
        .map_err(|e| GeneratorError::from(e.into_error()))
}
