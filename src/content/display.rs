use crate::config::TrackField;

use super::model::Track;

/// Build the "now playing" line for a track according to the configured
/// `fields` and separator.
///
/// Empty fields are skipped; when nothing is left the title is used.
pub fn now_playing_text(track: &Track, fields: &[TrackField], sep: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackField::Title => {
                if !track.title.trim().is_empty() {
                    parts.push(track.title.trim().to_string());
                }
            }
            TrackField::Subtitle => {
                if !track.subtitle.trim().is_empty() {
                    parts.push(format!("Movie: {}", track.subtitle.trim()));
                }
            }
            TrackField::Position => parts.push(format!("#{}", track.id)),
            TrackField::Source => {
                if !track.source.trim().is_empty() {
                    parts.push(track.source.clone());
                }
            }
        }
    }

    if parts.is_empty() {
        track.title.clone()
    } else {
        parts.join(sep)
    }
}
