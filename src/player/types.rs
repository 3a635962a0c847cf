use std::fmt;

use thiserror::Error;

/// Token identifying one play attempt. Newer generations supersede older ones.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub u64);

impl Generation {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the media backend must do after a selector transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaCommand {
    /// Start playing `source`. With `reload` the stream restarts from the
    /// beginning even if it is already loaded; otherwise a loaded stream resumes.
    Start {
        generation: Generation,
        source: String,
        reload: bool,
    },
    /// Pause whatever is audible.
    Pause,
    /// Mute or unmute output without touching playback.
    SetMuted(bool),
}

/// Outcome reported by the media backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaEvent {
    /// The attempt tagged with this generation is now audible.
    Started(Generation),
    /// The backend refused to start the attempt.
    Rejected(Generation, RejectReason),
    /// The stream started by this generation played to its end.
    Ended(Generation),
}

/// Why the backend refused to start playback.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectReason {
    #[error("no audio output device available")]
    NoOutputDevice,

    #[error("could not fetch {locator}: {message}")]
    Fetch { locator: String, message: String },

    #[error("could not decode {locator}: {message}")]
    Decode { locator: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    #[error("the playlist is empty")]
    EmptyPlaylist,

    #[error("track index {index} is out of range (playlist has {len} tracks)")]
    TrackOutOfRange { index: usize, len: usize },
}
