//! Commands understood by the audio thread.

use std::sync::Arc;

use crate::player::{Generation, RejectReason};

#[derive(Debug)]
pub(crate) enum AudioCmd {
    /// Start `source`; see [`MediaCommand::Start`](crate::player::MediaCommand::Start).
    Start {
        generation: Generation,
        source: String,
        reload: bool,
    },
    /// Pause the audible stream, if any.
    Pause,
    /// Mute or unmute the output.
    SetMuted(bool),
    /// A fetch worker finished reading `source`.
    Fetched {
        source: String,
        result: Result<Arc<[u8]>, RejectReason>,
    },
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}
