//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema (audio, ui, playback,
//! greeting content and logging) and helpers to load it from disk.

mod load;
mod schema;

pub use load::default_log_path;
pub use schema::*;

#[cfg(test)]
mod tests;
