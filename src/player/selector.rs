use crate::content::Track;

use super::types::{Generation, MediaCommand, MediaEvent, PlayerError, RejectReason};

/// Observable playback state of the playlist.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct PlaybackState {
    /// Index of the current track; always valid for the playlist.
    pub current: usize,
    /// True only once the backend confirmed the current attempt.
    pub is_playing: bool,
    pub is_muted: bool,
}

/// Single owner of [`PlaybackState`].
#[derive(Debug)]
pub struct PlaybackSelector {
    tracks: Vec<Track>,
    state: PlaybackState,
    generation: Generation,
    pending: Option<Generation>,
}

impl PlaybackSelector {
    /// Create a selector over a fixed, non-empty playlist. The first track is
    /// current and nothing plays.
    pub fn new(tracks: Vec<Track>) -> Result<Self, PlayerError> {
        if tracks.is_empty() {
            return Err(PlayerError::EmptyPlaylist);
        }
        Ok(Self {
            tracks,
            state: PlaybackState::default(),
            generation: Generation::default(),
            pending: None,
        })
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.state.current
    }

    pub fn current_track(&self) -> &Track {
        &self.tracks[self.state.current]
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn is_muted(&self) -> bool {
        self.state.is_muted
    }

    /// True while a start attempt is waiting for the backend's answer.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Select the track at `index`.
    ///
    /// Selecting the track that is already playing toggles playback instead
    /// of restarting it.
    pub fn select_track(&mut self, index: usize) -> Result<MediaCommand, PlayerError> {
        if index >= self.tracks.len() {
            return Err(PlayerError::TrackOutOfRange {
                index,
                len: self.tracks.len(),
            });
        }
        Ok(self.select_in_range(index))
    }

    /// Pause when playing, otherwise ask the backend to start the current track.
    pub fn toggle_play(&mut self) -> MediaCommand {
        if self.state.is_playing {
            self.generation = self.generation.next();
            self.pending = None;
            self.state.is_playing = false;
            log::debug!("pausing track {}", self.current_track().id);
            MediaCommand::Pause
        } else {
            self.start_attempt(false)
        }
    }

    /// Select the following track, wrapping to the first. With a single
    /// playing track this pauses it, like reselecting it would.
    pub fn next_track(&mut self) -> MediaCommand {
        let len = self.tracks.len();
        self.select_in_range((self.state.current + 1) % len)
    }

    pub fn previous_track(&mut self) -> MediaCommand {
        let len = self.tracks.len();
        self.select_in_range((self.state.current + len - 1) % len)
    }

    pub fn set_muted(&mut self, muted: bool) -> MediaCommand {
        self.state.is_muted = muted;
        MediaCommand::SetMuted(muted)
    }

    pub fn toggle_muted(&mut self) -> MediaCommand {
        self.set_muted(!self.state.is_muted)
    }

    /// The stream of `generation` finished naturally: advance with wraparound.
    ///
    /// Returns `None` when the notification belongs to a superseded attempt.
    pub fn on_track_ended(&mut self, generation: Generation) -> Option<MediaCommand> {
        if !self.state.is_playing || generation != self.generation {
            log::debug!("ignoring stale end of {generation}");
            return None;
        }
        Some(self.next_track())
    }

    /// The backend confirmed that `generation` is audible.
    pub fn on_started(&mut self, generation: Generation) {
        if self.pending == Some(generation) {
            self.pending = None;
            self.state.is_playing = true;
            log::info!("playing \"{}\"", self.current_track().title);
        } else {
            log::debug!("ignoring stale start of {generation}");
        }
    }

    /// The backend refused `generation`. Playback simply stays paused.
    pub fn on_rejected(&mut self, generation: Generation, reason: &RejectReason) {
        if self.pending == Some(generation) {
            self.pending = None;
            self.state.is_playing = false;
            log::warn!(
                "playback of \"{}\" was rejected: {reason}",
                self.current_track().title
            );
        } else {
            log::debug!("ignoring stale rejection of {generation}: {reason}");
        }
    }

    /// Feed one backend event; returns the follow-up command, if any.
    pub fn handle_event(&mut self, event: MediaEvent) -> Option<MediaCommand> {
        match event {
            MediaEvent::Started(generation) => {
                self.on_started(generation);
                None
            }
            MediaEvent::Rejected(generation, reason) => {
                self.on_rejected(generation, &reason);
                None
            }
            MediaEvent::Ended(generation) => self.on_track_ended(generation),
        }
    }

    /// `index` must be in range.
    fn select_in_range(&mut self, index: usize) -> MediaCommand {
        if index == self.state.current && self.state.is_playing {
            return self.toggle_play();
        }
        self.switch_to(index)
    }

    fn switch_to(&mut self, index: usize) -> MediaCommand {
        self.state.current = index;
        self.state.is_playing = false;
        self.start_attempt(true)
    }

    fn start_attempt(&mut self, reload: bool) -> MediaCommand {
        self.generation = self.generation.next();
        self.pending = Some(self.generation);
        MediaCommand::Start {
            generation: self.generation,
            source: self.current_track().source.clone(),
            reload,
        }
    }
}
