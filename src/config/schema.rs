use std::path::PathBuf;

use serde::Deserialize;

use crate::content::{self, Memory, TrackEntry, Texts};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/serenade/config.toml` or `~/.config/serenade/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `SERENADE__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub ui: UiSettings,
    pub playback: PlaybackSettings,
    pub content: ContentSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Output volume in `[0.0, 1.0]` while unmuted.
    pub volume: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
    /// Timeout for downloading a remote track (seconds).
    pub fetch_timeout_secs: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            quit_fade_out_ms: 500,
            fetch_timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Redraw/input poll interval (milliseconds).
    pub tick_ms: u64,
    /// Delay between the final answer and the reveal of the other sections.
    pub reveal_delay_ms: u64,
    /// How long the camera flash lasts before the gallery opens.
    pub flash_ms: u64,
    /// Delay between two reasons appearing.
    pub reason_stagger_ms: u64,
    /// Number of twinkling sparkles in the background.
    pub sparkles: usize,
    /// Number of floating flowers in the background.
    pub flowers: usize,

    /// Which track fields to show in the now-playing line, and in what order.
    ///
    /// Example: ["title", "subtitle"]
    pub now_playing_fields: Vec<TrackField>,
    /// Separator used to join `now_playing_fields`.
    pub now_playing_separator: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ for you, with love ~ ".to_string(),
            tick_ms: 50,
            reveal_delay_ms: 1000,
            flash_ms: 200,
            reason_stagger_ms: 100,
            sparkles: 40,
            flowers: 20,
            now_playing_fields: vec![TrackField::Title, TrackField::Subtitle],
            now_playing_separator: " • ".to_string(),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackField {
    Title,
    #[serde(alias = "movie", alias = "artist")]
    Subtitle,
    #[serde(alias = "url", alias = "path")]
    Source,
    #[serde(alias = "number", alias = "id")]
    Position,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether output starts muted.
    pub start_muted: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ContentSettings {
    pub texts: Texts,
    pub tracks: Vec<TrackEntry>,
    pub memories: Vec<Memory>,
    pub reasons: Vec<String>,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            texts: Texts::default(),
            tracks: content::default_tracks(),
            memories: content::default_memories(),
            reasons: content::default_reasons(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `env_logger` filter used when `SERENADE_LOG` is not set.
    pub level: String,
    /// Log file. Defaults to `$XDG_STATE_HOME/serenade/serenade.log`.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
