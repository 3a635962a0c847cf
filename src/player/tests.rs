use super::*;
use crate::content::Track;

fn tracks(n: usize) -> Vec<Track> {
    (0..n)
        .map(|i| Track {
            id: i + 1,
            title: format!("Track {i}"),
            subtitle: format!("Film {i}"),
            source: format!("/tmp/track-{i}.mp3"),
        })
        .collect()
}

fn generation_of(cmd: &MediaCommand) -> Generation {
    match cmd {
        MediaCommand::Start { generation, .. } => *generation,
        other => panic!("expected a start command, got {other:?}"),
    }
}

/// Selector with `current` playing, confirmed by the backend, plus the
/// generation of the audible attempt.
fn playing_at(n: usize, current: usize) -> (PlaybackSelector, Generation) {
    let mut s = PlaybackSelector::new(tracks(n)).unwrap();
    let g = generation_of(&s.select_track(current).unwrap());
    s.on_started(g);
    assert!(s.is_playing());
    (s, g)
}

#[test]
fn new_rejects_an_empty_playlist() {
    assert_eq!(
        PlaybackSelector::new(Vec::new()).unwrap_err(),
        PlayerError::EmptyPlaylist
    );
}

#[test]
fn starts_on_first_track_paused_and_unmuted() {
    let s = PlaybackSelector::new(tracks(3)).unwrap();
    assert_eq!(s.state(), PlaybackState::default());
    assert_eq!(s.current_track().id, 1);
    assert!(!s.is_pending());
}

#[test]
fn next_track_n_times_returns_to_start() {
    for n in 1..=6 {
        for start in 0..n {
            let mut s = PlaybackSelector::new(tracks(n)).unwrap();
            s.select_track(start).unwrap();
            for _ in 0..n {
                s.next_track();
            }
            assert_eq!(s.current_index(), start, "n={n} start={start}");
        }
    }
}

#[test]
fn previous_track_undoes_next_track() {
    for start in 0..4 {
        let mut s = PlaybackSelector::new(tracks(4)).unwrap();
        s.select_track(start).unwrap();
        s.next_track();
        s.previous_track();
        assert_eq!(s.current_index(), start);
    }
}

#[test]
fn selecting_the_playing_track_toggles_instead_of_reloading() {
    let (mut s, _) = playing_at(4, 2);
    let cmd = s.select_track(2).unwrap();
    assert_eq!(cmd, MediaCommand::Pause);
    assert_eq!(s.current_index(), 2);
    assert!(!s.is_playing());

    // Paused now: selecting it again is a fresh start of the same track.
    let cmd = s.select_track(2).unwrap();
    assert!(matches!(cmd, MediaCommand::Start { reload: true, .. }));
}

#[test]
fn selecting_another_track_resets_playing_before_any_outcome() {
    let (mut s, _) = playing_at(4, 0);
    let cmd = s.select_track(3).unwrap();
    assert_eq!(s.current_index(), 3);
    assert!(!s.is_playing());
    assert!(s.is_pending());
    match cmd {
        MediaCommand::Start { source, reload, .. } => {
            assert_eq!(source, "/tmp/track-3.mp3");
            assert!(reload);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn select_track_out_of_range_leaves_state_untouched() {
    let (mut s, _) = playing_at(4, 1);
    let before = s.state();
    assert_eq!(
        s.select_track(4).unwrap_err(),
        PlayerError::TrackOutOfRange { index: 4, len: 4 }
    );
    assert_eq!(s.state(), before);
}

#[test]
fn track_end_advances_and_wraps_around() {
    for k in 0..4 {
        let (mut s, playing) = playing_at(4, k);
        let cmd = s.on_track_ended(playing).expect("end of the audible track advances");
        assert_eq!(s.current_index(), (k + 1) % 4);
        assert!(matches!(cmd, MediaCommand::Start { reload: true, .. }));
        assert!(!s.is_playing());
    }
}

#[test]
fn stale_track_end_is_ignored() {
    let mut s = PlaybackSelector::new(tracks(4)).unwrap();
    let first = generation_of(&s.select_track(0).unwrap());
    s.on_started(first);
    let second = generation_of(&s.next_track());
    s.on_started(second);

    assert_eq!(s.on_track_ended(first), None);
    assert_eq!(s.current_index(), 1);
    assert!(s.is_playing());
}

#[test]
fn late_start_of_a_superseded_attempt_is_discarded() {
    let mut s = PlaybackSelector::new(tracks(4)).unwrap();
    let old = generation_of(&s.select_track(1).unwrap());
    let new = generation_of(&s.select_track(2).unwrap());
    assert!(new > old);

    s.on_started(old);
    assert!(!s.is_playing());
    assert!(s.is_pending());

    s.on_started(new);
    assert!(s.is_playing());
    assert_eq!(s.current_index(), 2);
}

#[test]
fn start_of_an_abandoned_track_is_discarded() {
    let (mut s, _) = playing_at(3, 0);
    let pending = generation_of(&s.next_track());
    let newer = generation_of(&s.previous_track());
    s.on_started(pending);
    assert!(!s.is_playing());
    s.on_started(newer);
    assert!(s.is_playing());
    assert_eq!(s.current_index(), 0);
}

#[test]
fn duplicate_start_after_pause_does_not_resume() {
    let (mut s, g) = playing_at(3, 1);
    assert_eq!(s.toggle_play(), MediaCommand::Pause);
    s.on_started(g);
    assert!(!s.is_playing());
    assert_eq!(s.on_track_ended(g), None);
}

#[test]
fn rejected_start_stays_paused_without_error() {
    let mut s = PlaybackSelector::new(tracks(4)).unwrap();
    let cmd = s.select_track(2).unwrap();
    let follow_up = s.handle_event(MediaEvent::Rejected(
        generation_of(&cmd),
        RejectReason::NoOutputDevice,
    ));
    assert_eq!(follow_up, None);
    assert_eq!(s.current_index(), 2);
    assert!(!s.is_playing());
    assert!(!s.is_pending());
}

#[test]
fn stale_rejection_does_not_clear_a_newer_pending_attempt() {
    let mut s = PlaybackSelector::new(tracks(4)).unwrap();
    let old = generation_of(&s.select_track(1).unwrap());
    s.select_track(3).unwrap();
    s.on_rejected(old, &RejectReason::NoOutputDevice);
    assert!(s.is_pending());
}

#[test]
fn toggle_play_resumes_without_reload() {
    let mut s = PlaybackSelector::new(tracks(2)).unwrap();
    let cmd = s.toggle_play();
    match cmd {
        MediaCommand::Start { reload, ref source, .. } => {
            assert!(!reload);
            assert_eq!(source, "/tmp/track-0.mp3");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(!s.is_playing());
    s.on_started(generation_of(&cmd));
    assert!(s.is_playing());
    assert_eq!(s.toggle_play(), MediaCommand::Pause);
    assert!(!s.is_playing());
}

#[test]
fn muting_does_not_affect_playback() {
    let (mut s, _) = playing_at(2, 1);
    assert_eq!(s.set_muted(true), MediaCommand::SetMuted(true));
    assert!(s.is_muted());
    assert!(s.is_playing());
    assert_eq!(s.toggle_muted(), MediaCommand::SetMuted(false));
    assert!(!s.is_muted());
    assert!(s.is_playing());
}

#[test]
fn four_track_scenario() {
    let (mut s, _) = playing_at(4, 0);

    let g = generation_of(&s.next_track());
    assert_eq!(s.current_index(), 1);
    assert!(!s.is_playing());

    s.on_started(g);
    assert_eq!(s.select_track(1).unwrap(), MediaCommand::Pause);
    assert_eq!(s.current_index(), 1);
    assert!(!s.is_playing());

    s.select_track(0).unwrap();
    s.previous_track();
    assert_eq!(s.current_index(), 3);
}

#[test]
fn single_playing_track_pauses_on_next_previous_and_end() {
    let (mut s, _) = playing_at(1, 0);
    assert_eq!(s.next_track(), MediaCommand::Pause);
    assert_eq!(s.current_index(), 0);
    assert!(!s.is_playing());

    let (mut s, _) = playing_at(1, 0);
    assert_eq!(s.previous_track(), MediaCommand::Pause);
    assert!(!s.is_playing());

    let (mut s, g) = playing_at(1, 0);
    assert_eq!(s.on_track_ended(g), Some(MediaCommand::Pause));
    assert!(!s.is_playing());
}

#[test]
fn single_paused_track_restarts_on_next() {
    let mut s = PlaybackSelector::new(tracks(1)).unwrap();
    let cmd = s.next_track();
    assert!(matches!(cmd, MediaCommand::Start { reload: true, .. }));
    assert_eq!(s.current_index(), 0);
}
