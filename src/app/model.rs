//! Application model types: `App`, the per-screen state enums and `Msg`.
//!
//! `App` owns the playback selector and every screen's state. All changes go
//! through [`App::update`], one message at a time.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Settings;
use crate::content::{self, Memory, Texts};
use crate::player::{MediaCommand, MediaEvent, PlaybackSelector, PlayerError};

/// Progress through the invitation. Only ever moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum InvitationStage {
    /// Sealed invitation card.
    #[default]
    Cover,
    /// The question with its yes/no buttons.
    Asking,
    /// Said yes; offered a chance to change their mind.
    Accepted,
    /// Tried to say no after all.
    Final,
}

/// Whether the sections below the invitation are available.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum ContentReveal {
    #[default]
    Hidden,
    Pending {
        since: Instant,
    },
    Shown,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum NoteState {
    #[default]
    Sealed,
    Open,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GalleryState {
    #[default]
    Camera,
    Flash {
        since: Instant,
    },
    Open,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Proposal,
    Note,
    Gallery,
    Reasons,
    Player,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Proposal,
        Section::Note,
        Section::Gallery,
        Section::Reasons,
        Section::Player,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Section::Proposal => "invitation",
            Section::Note => "note",
            Section::Gallery => "memories",
            Section::Reasons => "reasons",
            Section::Player => "playlist",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&s| s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Where the dodging "No" button currently sits, relative to its home.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub struct Offset {
    pub x: i16,
    pub y: i16,
}

/// Inbound messages, consumed one at a time by [`App::update`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Msg {
    OpenInvitation,
    Accept,
    DodgeNo,
    ChangeMind,
    FocusNext,
    FocusPrev,
    ToggleNote,
    CaptureMemories,
    ResetCamera,
    CursorUp,
    CursorDown,
    PlaySelected,
    SelectTrack(usize),
    TogglePlay,
    NextTrack,
    PrevTrack,
    ToggleMute,
    Media(MediaEvent),
    Tick,
}

/// Durations driving the timed transitions.
#[derive(Copy, Clone, Debug)]
pub struct Timings {
    pub reveal_delay: Duration,
    pub flash: Duration,
    pub reason_stagger: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(1000),
            flash: Duration::from_millis(200),
            reason_stagger: Duration::from_millis(100),
        }
    }
}

/// Largest distance, in cells, the "No" button jumps away.
pub const DODGE_RANGE: Offset = Offset { x: 20, y: 3 };

/// The main application model.
pub struct App {
    pub stage: InvitationStage,
    pub reveal: ContentReveal,
    pub note: NoteState,
    pub gallery: GalleryState,
    pub focus: Section,
    pub no_offset: Offset,
    pub player: PlaybackSelector,
    pub track_cursor: usize,

    pub texts: Texts,
    pub memories: Vec<Memory>,
    pub reasons: Vec<String>,

    pub timings: Timings,
    pub started_at: Instant,
    reasons_since: Option<Instant>,
    rng: StdRng,
}

impl App {
    /// Build the app from loaded settings. Fails only on an empty playlist.
    pub fn new(settings: &Settings, now: Instant) -> Result<Self, PlayerError> {
        let tracks = content::playlist(&settings.content.tracks);
        let mut app = Self::with_rng(
            PlaybackSelector::new(tracks)?,
            StdRng::from_os_rng(),
            now,
        );
        app.texts = settings.content.texts.clone();
        app.memories = settings.content.memories.clone();
        app.reasons = settings.content.reasons.clone();
        app.timings = Timings {
            reveal_delay: Duration::from_millis(settings.ui.reveal_delay_ms),
            flash: Duration::from_millis(settings.ui.flash_ms),
            reason_stagger: Duration::from_millis(settings.ui.reason_stagger_ms),
        };
        Ok(app)
    }

    /// Build an app with default content around `player`, using `rng` for
    /// the dodging button.
    pub fn with_rng(player: PlaybackSelector, rng: StdRng, now: Instant) -> Self {
        Self {
            stage: InvitationStage::default(),
            reveal: ContentReveal::default(),
            note: NoteState::default(),
            gallery: GalleryState::default(),
            focus: Section::default(),
            no_offset: Offset::default(),
            player,
            track_cursor: 0,
            texts: Texts::default(),
            memories: content::default_memories(),
            reasons: content::default_reasons(),
            timings: Timings::default(),
            started_at: now,
            reasons_since: None,
            rng,
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal == ContentReveal::Shown
    }

    /// How many reasons are visible at `now`; they appear one after another
    /// once the section has been visited.
    pub fn visible_reasons(&self, now: Instant) -> usize {
        let Some(since) = self.reasons_since else {
            return 0;
        };
        let stagger = self.timings.reason_stagger.as_millis();
        if stagger == 0 {
            return self.reasons.len();
        }
        let shown = now.saturating_duration_since(since).as_millis() / stagger + 1;
        (shown.min(self.reasons.len() as u128)) as usize
    }

    /// Apply one message. Returns the media command to forward, if any.
    pub fn update(&mut self, msg: Msg, now: Instant) -> Option<MediaCommand> {
        match msg {
            Msg::OpenInvitation => {
                if self.stage == InvitationStage::Cover {
                    self.stage = InvitationStage::Asking;
                }
                None
            }
            Msg::Accept => {
                if self.stage == InvitationStage::Asking {
                    self.stage = InvitationStage::Accepted;
                    self.no_offset = Offset::default();
                    log::info!("invitation accepted");
                }
                None
            }
            Msg::DodgeNo => {
                if self.stage == InvitationStage::Asking {
                    self.no_offset = Offset {
                        x: self.rng.random_range(-DODGE_RANGE.x..=DODGE_RANGE.x),
                        y: self.rng.random_range(-DODGE_RANGE.y..=DODGE_RANGE.y),
                    };
                }
                None
            }
            Msg::ChangeMind => {
                if self.stage == InvitationStage::Accepted {
                    self.stage = InvitationStage::Final;
                    self.reveal = ContentReveal::Pending { since: now };
                }
                None
            }
            Msg::FocusNext => {
                if self.is_revealed() {
                    self.set_focus(self.focus.next(), now);
                }
                None
            }
            Msg::FocusPrev => {
                if self.is_revealed() {
                    self.set_focus(self.focus.prev(), now);
                }
                None
            }
            Msg::ToggleNote => {
                self.note = match self.note {
                    NoteState::Sealed => NoteState::Open,
                    NoteState::Open => NoteState::Sealed,
                };
                None
            }
            Msg::CaptureMemories => {
                if self.gallery == GalleryState::Camera {
                    self.gallery = GalleryState::Flash { since: now };
                }
                None
            }
            Msg::ResetCamera => {
                if self.gallery == GalleryState::Open {
                    self.gallery = GalleryState::Camera;
                }
                None
            }
            Msg::CursorUp => {
                let len = self.player.tracks().len();
                self.track_cursor = (self.track_cursor + len - 1) % len;
                None
            }
            Msg::CursorDown => {
                self.track_cursor = (self.track_cursor + 1) % self.player.tracks().len();
                None
            }
            Msg::PlaySelected => self.select(self.track_cursor),
            Msg::SelectTrack(index) => self.select(index),
            Msg::TogglePlay => Some(self.player.toggle_play()),
            Msg::NextTrack => self.follow(|p| Some(p.next_track())),
            Msg::PrevTrack => self.follow(|p| Some(p.previous_track())),
            Msg::ToggleMute => Some(self.player.toggle_muted()),
            Msg::Media(event) => self.follow(|p| p.handle_event(event)),
            Msg::Tick => {
                self.tick(now);
                None
            }
        }
    }

    fn select(&mut self, index: usize) -> Option<MediaCommand> {
        match self.player.select_track(index) {
            Ok(cmd) => {
                self.track_cursor = self.player.current_index();
                Some(cmd)
            }
            Err(e) => {
                log::warn!("ignoring selection: {e}");
                None
            }
        }
    }

    /// Run a selector transition and keep the list cursor on the current track.
    fn follow(
        &mut self,
        f: impl FnOnce(&mut PlaybackSelector) -> Option<MediaCommand>,
    ) -> Option<MediaCommand> {
        let before = self.player.current_index();
        let cmd = f(&mut self.player);
        let after = self.player.current_index();
        if after != before {
            self.track_cursor = after;
        }
        cmd
    }

    fn set_focus(&mut self, section: Section, now: Instant) {
        self.focus = section;
        if section == Section::Reasons && self.reasons_since.is_none() {
            self.reasons_since = Some(now);
        }
    }

    fn tick(&mut self, now: Instant) {
        if let ContentReveal::Pending { since } = self.reveal {
            if now.saturating_duration_since(since) >= self.timings.reveal_delay {
                self.reveal = ContentReveal::Shown;
                log::debug!("revealing the rest of the greeting");
            }
        }
        if let GalleryState::Flash { since } = self.gallery {
            if now.saturating_duration_since(since) >= self.timings.flash {
                self.gallery = GalleryState::Open;
            }
        }
    }
}
