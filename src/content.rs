//! Greeting content: the playlist, the memories and the texts shown on
//! each screen.
//!
//! Everything here has a built-in default and can be replaced from the
//! `[content]` table of the config file.

mod defaults;
mod display;
mod model;

pub use defaults::*;
pub use display::now_playing_text;
pub use model::*;

#[cfg(test)]
mod tests;
