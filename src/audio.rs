//! Audio backend: a dedicated thread owning the rodio output stream.
//!
//! The thread receives [`MediaCommand`](crate::player::MediaCommand)s via
//! [`AudioPlayer::execute`] and reports outcomes as
//! [`MediaEvent`](crate::player::MediaEvent)s. Sources are fetched on worker
//! threads so a slow download never blocks pause or mute.

mod player;
mod sink;
mod source;
mod thread;
mod types;

pub use player::AudioPlayer;
