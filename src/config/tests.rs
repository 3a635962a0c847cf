use super::load::{default_config_path, default_log_path, resolve_config_path};
use super::schema::*;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|e| e.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_serenade_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("SERENADE_CONFIG_PATH", "/tmp/serenade-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        std::path::PathBuf::from("/tmp/serenade-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/xdg-config-home")
            .join("serenade")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    let p = default_config_path().unwrap();
    assert_eq!(
        p,
        std::path::PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("serenade")
            .join("config.toml")
    );
}

#[test]
fn default_log_path_uses_xdg_state_home_then_local_state() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_STATE_HOME", "/tmp/xdg-state");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/xdg-state/serenade/serenade.log")
    );

    let _g2 = EnvGuard::remove("XDG_STATE_HOME");
    let _g3 = EnvGuard::set("HOME", "/tmp/home-dir");
    assert_eq!(
        default_log_path().unwrap(),
        std::path::PathBuf::from("/tmp/home-dir/.local/state/serenade/serenade.log")
    );
}

#[test]
fn defaults_are_valid() {
    let s = Settings::default();
    assert!(s.validate().is_ok());
    assert_eq!(s.content.tracks.len(), 4);
    assert_eq!(s.ui.reveal_delay_ms, 1000);
    assert_eq!(s.ui.sparkles, 40);
    assert_eq!(s.ui.flowers, 20);
    assert!(!s.playback.start_muted);
}

#[test]
fn validate_rejects_empty_playlist_and_bad_volume() {
    let mut s = Settings::default();
    s.content.tracks.clear();
    assert!(s.validate().unwrap_err().contains("content.tracks"));

    let mut s = Settings::default();
    s.audio.volume = 1.5;
    assert!(s.validate().unwrap_err().contains("audio.volume"));

    let mut s = Settings::default();
    s.ui.tick_ms = 1;
    assert!(s.validate().is_err());
}

#[test]
fn settings_load_from_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
volume = 0.5
quit_fade_out_ms = 0
fetch_timeout_secs = 5

[ui]
header_text = "hello"
reveal_delay_ms = 250
sparkles = 0
now_playing_fields = ["position", "movie"]
now_playing_separator = " | "

[playback]
start_muted = true

[content]
reasons = ["one", "two"]

[content.texts]
question = "Dinner on Friday?"

[[content.tracks]]
title = "Local song"
source = "/tmp/song.ogg"

[[content.tracks]]
title = "Remote song"
subtitle = "Somewhere"
source = "https://example.com/song.mp3"

[logging]
level = "debug"
file = "/tmp/serenade-test.log"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SERENADE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::remove("SERENADE__AUDIO__VOLUME");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.volume, 0.5);
    assert_eq!(s.audio.quit_fade_out_ms, 0);
    assert_eq!(s.audio.fetch_timeout_secs, 5);
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(s.ui.reveal_delay_ms, 250);
    assert_eq!(s.ui.sparkles, 0);
    assert_eq!(s.ui.flowers, 20);
    assert_eq!(
        s.ui.now_playing_fields,
        vec![TrackField::Position, TrackField::Subtitle]
    );
    assert_eq!(s.ui.now_playing_separator, " | ");
    assert!(s.playback.start_muted);
    assert_eq!(s.content.reasons, vec!["one".to_string(), "two".to_string()]);
    assert_eq!(s.content.texts.question, "Dinner on Friday?");
    assert_eq!(s.content.texts.note_closing, "Forever Yours.");
    assert_eq!(s.content.tracks.len(), 2);
    assert_eq!(s.content.tracks[0].subtitle, "");
    assert_eq!(s.content.tracks[1].source, "https://example.com/song.mp3");
    assert_eq!(s.content.memories.len(), 6);
    assert_eq!(s.logging.level, "debug");
    assert_eq!(
        s.logging.file.as_deref(),
        Some(std::path::Path::new("/tmp/serenade-test.log"))
    );
    assert!(s.validate().is_ok());
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[audio]
quit_fade_out_ms = 250
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("SERENADE_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("SERENADE__AUDIO__QUIT_FADE_OUT_MS", "0");

    let s = Settings::load().unwrap();
    assert_eq!(s.audio.quit_fade_out_ms, 0);
}
