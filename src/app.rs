//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds every screen's state
//! together with the playback selector.

mod model;

pub use model::*;
