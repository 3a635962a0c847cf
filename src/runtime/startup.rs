use crate::app::App;
use crate::audio::AudioPlayer;
use crate::config;

pub fn apply_playback_defaults(app: &mut App, audio_player: &AudioPlayer, settings: &config::Settings) {
    if settings.playback.start_muted {
        audio_player.execute(app.player.set_muted(true));
    }
    log::info!(
        "playlist ready: {} tracks, starting with \"{}\"",
        app.player.tracks().len(),
        app.player.current_track().title
    );
}
