mod app;
mod audio;
mod config;
mod content;
mod effects;
mod error;
mod player;
mod runtime;
mod ui;

fn main() -> Result<(), error::Error> {
    runtime::run()
}
