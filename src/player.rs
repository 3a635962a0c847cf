//! Playback selector: owns the playback state of the playlist.
//!
//! The selector never talks to an audio device. Every operation returns the
//! [`MediaCommand`] the backend has to carry out, and the backend answers
//! with [`MediaEvent`]s. Each play attempt is tagged with a [`Generation`];
//! outcomes of superseded attempts are ignored.

mod selector;
mod types;

pub use selector::*;
pub use types::*;

#[cfg(test)]
mod tests;
