use thiserror::Error;

use crate::player::PlayerError;

/// Errors that abort the program. Everything else is logged and recovered.
#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot start the player: {0}")]
    Player(#[from] PlayerError),
}
