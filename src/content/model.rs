use serde::Deserialize;

/// One selectable playlist entry.
///
/// `id` is the 1-based position in the playlist; tracks are built once at
/// startup and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub id: usize,
    pub title: String,
    pub subtitle: String,
    /// Local path or http(s) URL of the audio stream.
    pub source: String,
}

/// A playlist entry as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrackEntry {
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub source: String,
}

/// A polaroid in the memories gallery. The image locator is only displayed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Memory {
    pub caption: String,
    #[serde(default)]
    pub image: String,
}

/// Free-form texts of the greeting screens.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Texts {
    pub invitation_title: String,
    pub invitation_from: String,
    pub question: String,
    pub accepted: String,
    pub change_mind_hint: String,
    pub final_words: String,
    pub note_title: String,
    pub note_subtitle: String,
    pub note_salutation: String,
    pub note_body: String,
    pub note_closing: String,
    pub gallery_title: String,
    pub gallery_subtitle: String,
    pub reasons_title: String,
    pub reasons_subtitle: String,
    pub playlist_title: String,
    pub footer: String,
}

/// Build the fixed playlist from config entries, assigning stable ids.
pub fn playlist(entries: &[TrackEntry]) -> Vec<Track> {
    entries
        .iter()
        .enumerate()
        .map(|(i, e)| Track {
            id: i + 1,
            title: e.title.trim().to_string(),
            subtitle: e.subtitle.trim().to_string(),
            source: e.source.trim().to_string(),
        })
        .collect()
}
