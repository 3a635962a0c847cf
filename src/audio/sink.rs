//! Utilities for creating `rodio` sinks from fetched track bytes.
//!
//! The helper here decodes an in-memory stream and prepares a paused `Sink`.

use std::io::Cursor;
use std::sync::Arc;

use rodio::{Decoder, OutputStream, Sink};

use crate::player::RejectReason;

/// Create a paused `Sink` playing `bytes` from the beginning.
pub(super) fn create_sink(
    stream: &OutputStream,
    bytes: Arc<[u8]>,
    locator: &str,
    volume: f32,
) -> Result<Sink, RejectReason> {
    let source = Decoder::new(Cursor::new(bytes)).map_err(|e| RejectReason::Decode {
        locator: locator.to_string(),
        message: e.to_string(),
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}
