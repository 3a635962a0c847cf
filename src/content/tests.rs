use super::*;
use crate::config::TrackField;

fn entry(title: &str, subtitle: &str) -> TrackEntry {
    TrackEntry {
        title: title.into(),
        subtitle: subtitle.into(),
        source: format!("/tmp/{title}.mp3"),
    }
}

#[test]
fn playlist_assigns_stable_one_based_ids() {
    let tracks = playlist(&[entry("A", "x"), entry("B", "y"), entry("C", "z")]);
    let ids: Vec<usize> = tracks.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(tracks[1].title, "B");
}

#[test]
fn playlist_trims_entry_fields() {
    let tracks = playlist(&[TrackEntry {
        title: "  Singari ".into(),
        subtitle: " Dude".into(),
        source: " /tmp/s.mp3 ".into(),
    }]);
    assert_eq!(tracks[0].title, "Singari");
    assert_eq!(tracks[0].subtitle, "Dude");
    assert_eq!(tracks[0].source, "/tmp/s.mp3");
}

#[test]
fn now_playing_text_follows_field_order() {
    let track = &playlist(&[entry("Song", "Film")])[0];
    assert_eq!(
        now_playing_text(track, &[TrackField::Title, TrackField::Subtitle], " - "),
        "Song - Movie: Film"
    );
    assert_eq!(
        now_playing_text(track, &[TrackField::Position, TrackField::Title], " "),
        "#1 Song"
    );
}

#[test]
fn now_playing_text_skips_blank_fields_and_falls_back_to_title() {
    let track = &playlist(&[entry("Song", "")])[0];
    assert_eq!(
        now_playing_text(track, &[TrackField::Subtitle, TrackField::Title], " - "),
        "Song"
    );
    assert_eq!(now_playing_text(track, &[TrackField::Subtitle], " - "), "Song");
    assert_eq!(now_playing_text(track, &[], " - "), "Song");
}

#[test]
fn default_content_is_complete() {
    assert_eq!(default_tracks().len(), 4);
    assert_eq!(default_memories().len(), 6);
    assert_eq!(default_reasons().len(), 7);
    assert!(default_tracks().iter().all(|t| t.source.starts_with("https://")));
    assert_eq!(Texts::default().question, "Will you be my Valentine?");
}

#[test]
fn entries_parse_from_toml_with_optional_fields() {
    #[derive(serde::Deserialize)]
    struct Doc {
        tracks: Vec<TrackEntry>,
        memories: Vec<Memory>,
        texts: Texts,
    }

    let doc: Doc = toml::from_str(
        r#"
        [[tracks]]
        title = "Only"
        source = "/tmp/only.mp3"

        [[memories]]
        caption = "Us"

        [texts]
        question = "Coffee?"
        "#,
    )
    .unwrap();

    assert_eq!(doc.tracks[0].subtitle, "");
    assert_eq!(doc.memories[0].image, "");
    assert_eq!(doc.texts.question, "Coffee?");
    assert_eq!(doc.texts.footer, Texts::default().footer);
}
