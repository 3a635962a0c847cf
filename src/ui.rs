//! UI rendering helpers for the terminal user interface.
//!
//! Everything here is a pure function of the app state and the current time;
//! `draw` is called once per tick.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Tabs, Wrap},
};
use std::time::{Duration, Instant};

use crate::app::{App, InvitationStage, Section};
use crate::config::UiSettings;
use crate::content;
use crate::effects::{Backdrop, FlowerKind, GlyphKind};

mod proposal;
mod sections;


/// Key hints for whatever currently has focus.
fn controls_text(app: &App) -> String {
    let mut hints: Vec<&str> = match app.focus {
        Section::Proposal => match app.stage {
            InvitationStage::Cover => vec!["[enter] open"],
            InvitationStage::Asking => vec!["[y] yes", "[n] no"],
            InvitationStage::Accepted => vec!["[n] change your mind"],
            InvitationStage::Final => vec![],
        },
        Section::Note => vec!["[enter] open/close"],
        Section::Gallery => vec!["[enter] snap", "[r] reset"],
        Section::Reasons => vec![],
        Section::Player => vec![
            "[j/k] up/down",
            "[enter] play selected",
            "[space/p] play/pause",
            "[h/l] prev/next",
            "[1-9] pick",
            "[m] mute",
        ],
    };
    if app.is_revealed() {
        hints.push("[tab] next section");
    }
    hints.push("[q] quit");
    hints.join(" | ")
}

/// Compute a centered rectangle of at most `width` x `height` inside `r`.
fn centered_rect_sized(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

fn padded() -> Padding {
    Padding {
        left: 1,
        right: 1,
        top: 0,
        bottom: 0,
    }
}

/// Paint sparkles and flowers straight into the frame buffer.
fn draw_backdrop(frame: &mut Frame, backdrop: &Backdrop, elapsed: Duration) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for glyph in backdrop.glyphs(elapsed, area.width, area.height) {
        let color = match glyph.kind {
            GlyphKind::Sparkle => Color::Yellow,
            GlyphKind::Flower(FlowerKind::Rose) => Color::LightRed,
            GlyphKind::Flower(FlowerKind::Orchid) => Color::Magenta,
        };
        if let Some(cell) = buf.cell_mut((area.x + glyph.x, area.y + glyph.y)) {
            cell.set_symbol(glyph.symbol).set_fg(color);
        }
    }
}

/// One-line playback status for the footer.
fn status_text(app: &App, ui: &UiSettings) -> String {
    let player = &app.player;
    let playback = player.state();
    let state = if playback.is_playing {
        "Playing"
    } else if player.is_pending() {
        "Loading"
    } else {
        "Paused"
    };
    let mut parts = vec![
        format!(
            "Song: {}",
            content::now_playing_text(
                player.current_track(),
                &ui.now_playing_fields,
                &ui.now_playing_separator
            )
        ),
        state.to_string(),
    ];
    if playback.is_muted {
        parts.push("Muted".to_string());
    }
    parts.join(" • ")
}

/// Render the entire UI into the provided `frame`.
pub fn draw(frame: &mut Frame, app: &App, backdrop: &Backdrop, ui: &UiSettings, now: Instant) {
    let elapsed = now.saturating_duration_since(app.started_at);
    draw_backdrop(frame, backdrop, elapsed);

    if !app.is_revealed() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(3)])
            .split(frame.area());
        proposal::draw(frame, app, chunks[0]);
        draw_footer(frame, app, ui, chunks[1]);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(frame.area());

    // Header with the section tabs.
    let titles: Vec<Line> = Section::ALL.iter().map(|s| Line::from(s.title())).collect();
    let selected = Section::ALL
        .iter()
        .position(|&s| s == app.focus)
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", ui.header_text.trim()))
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(Clear, chunks[0]);
    frame.render_widget(tabs, chunks[0]);

    match app.focus {
        Section::Proposal => proposal::draw(frame, app, chunks[1]),
        Section::Note => sections::draw_note(frame, app, chunks[1]),
        Section::Gallery => sections::draw_gallery(frame, app, chunks[1]),
        Section::Reasons => sections::draw_reasons(frame, app, chunks[1], now),
        Section::Player => sections::draw_player(frame, app, chunks[1], elapsed),
    }

    draw_footer(frame, app, ui, chunks[2]);
}

fn draw_footer(frame: &mut Frame, app: &App, ui: &UiSettings, area: Rect) {
    let mut lines = vec![Line::from(controls_text(app))];
    if app.is_revealed() {
        lines.insert(0, Line::from(status_text(app, ui)).italic());
    }
    let footer = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(padded()),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(Clear, area);
    frame.render_widget(footer, area);
}
