use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use env_logger::{Env, Target};

use crate::config::{self, LoggingSettings};

/// Send `log` output to a file; the terminal belongs to the UI.
///
/// `SERENADE_LOG` overrides the configured level. Returns the log file path,
/// or `None` when logging could not be set up (in which case it stays off).
pub fn init(settings: &LoggingSettings) -> Option<PathBuf> {
    let path = settings.file.clone().or_else(config::default_log_path)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    env_logger::Builder::from_env(Env::default().filter_or("SERENADE_LOG", settings.level.as_str()))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .ok()?;

    Some(path)
}
