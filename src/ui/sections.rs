//! Bodies of the sections shown once the invitation has been answered.

use std::time::{Duration, Instant};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use super::{centered_rect_sized, padded};
use crate::app::{App, GalleryState, NoteState};

const EQUALIZER_BARS: usize = 15;
const BAR_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];
const DISC_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
const GALLERY_COLUMNS: usize = 3;

fn section_block(title: &str, subtitle: &str) -> Block<'static> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .padding(padded());
    if !subtitle.is_empty() {
        block = block.title_bottom(Line::from(format!(" {subtitle} ")).italic().centered());
    }
    block
}

pub(super) fn draw_note(frame: &mut Frame, app: &App, area: Rect) {
    let texts = &app.texts;
    let lines: Vec<Line> = match app.note {
        NoteState::Sealed => vec![
            Line::from(""),
            Line::from("✉").fg(Color::LightRed).bold(),
            Line::from(""),
            Line::from("press enter to break the seal").dim(),
        ],
        NoteState::Open => {
            let mut lines = vec![Line::from(texts.note_salutation.as_str()).bold(), Line::from("")];
            lines.extend(texts.note_body.lines().map(Line::from));
            lines.push(Line::from(""));
            lines.push(Line::from(texts.note_closing.as_str()).italic().right_aligned());
            lines
        }
    };
    let alignment = match app.note {
        NoteState::Sealed => Alignment::Center,
        NoteState::Open => Alignment::Left,
    };
    let note = Paragraph::new(lines)
        .alignment(alignment)
        .wrap(Wrap { trim: true })
        .block(section_block(&texts.note_title, &texts.note_subtitle));
    frame.render_widget(Clear, area);
    frame.render_widget(note, area);
}

pub(super) fn draw_gallery(frame: &mut Frame, app: &App, area: Rect) {
    let block = section_block(&app.texts.gallery_title, &app.texts.gallery_subtitle);
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    match app.gallery {
        GalleryState::Camera => {
            let camera = Paragraph::new(vec![
                Line::from("  ┌───[■]───┐  "),
                Line::from("  │  ( ◎ )  │  "),
                Line::from("  └─────────┘  "),
                Line::from(""),
                Line::from("press enter to snap").dim(),
            ])
            .alignment(Alignment::Center);
            frame.render_widget(camera, centered_rect_sized(30, 5, inner));
        }
        GalleryState::Flash { .. } => {
            frame.render_widget(Block::default().style(Style::default().bg(Color::White)), inner);
        }
        GalleryState::Open => draw_polaroids(frame, app, inner),
    }
}

fn draw_polaroids(frame: &mut Frame, app: &App, area: Rect) {
    if app.memories.is_empty() {
        return;
    }
    let rows: Vec<_> = app.memories.chunks(GALLERY_COLUMNS).collect();
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(rows.iter().map(|_| Constraint::Ratio(1, rows.len() as u32)))
        .split(area);

    for (row, row_area) in rows.iter().zip(row_areas.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                (0..GALLERY_COLUMNS).map(|_| Constraint::Ratio(1, GALLERY_COLUMNS as u32)),
            )
            .split(*row_area);
        for (memory, cell) in row.iter().zip(cells.iter()) {
            let mut lines = vec![Line::from(memory.caption.as_str()).bold()];
            if !memory.image.is_empty() {
                lines.push(Line::from(memory.image.as_str()).dim());
            }
            let polaroid = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" ▣ "));
            frame.render_widget(polaroid, *cell);
        }
    }
}

pub(super) fn draw_reasons(frame: &mut Frame, app: &App, area: Rect, now: Instant) {
    let items: Vec<ListItem> = app
        .reasons
        .iter()
        .take(app.visible_reasons(now))
        .map(|r| ListItem::new(format!("❀ {r}")))
        .collect();
    let list = List::new(items).block(section_block(
        &app.texts.reasons_title,
        &app.texts.reasons_subtitle,
    ));
    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

/// Bar heights for the equalizer; flat while paused.
pub(super) fn equalizer(elapsed: Duration, playing: bool) -> String {
    if !playing {
        return BAR_LEVELS[0].to_string().repeat(EQUALIZER_BARS);
    }
    let t = elapsed.as_secs_f32();
    (0..EQUALIZER_BARS)
        .map(|i| {
            let speed = 3.0 + (i % 5) as f32 * 0.7;
            let level = ((t * speed + i as f32 * 1.3).sin() + 1.0) / 2.0;
            let idx = (level * (BAR_LEVELS.len() - 1) as f32).round() as usize;
            BAR_LEVELS[idx.min(BAR_LEVELS.len() - 1)]
        })
        .collect()
}

fn disc(elapsed: Duration, playing: bool) -> &'static str {
    if !playing {
        return "◉";
    }
    let frame = (elapsed.as_millis() / 250) as usize % DISC_FRAMES.len();
    DISC_FRAMES[frame]
}

pub(super) fn draw_player(frame: &mut Frame, app: &App, area: Rect, elapsed: Duration) {
    let player = &app.player;
    let block = section_block(&app.texts.playlist_title, "");
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(1)])
        .split(inner);

    let track = player.current_track();
    let playing = player.is_playing();
    let mut subtitle = String::new();
    if !track.subtitle.is_empty() {
        subtitle = format!("Movie: {}", track.subtitle);
    }
    let sound = if player.is_muted() { "🔇 muted" } else { "🔊 sound on" };
    let now_playing = Paragraph::new(vec![
        Line::from(format!("{}  {}", disc(elapsed, playing), track.title)).bold(),
        Line::from(subtitle).italic(),
        Line::from(""),
        Line::from(equalizer(elapsed, playing)).fg(Color::LightRed),
        Line::from(sound).dim(),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(now_playing, chunks[0]);

    let current = player.current_index();
    let items: Vec<ListItem> = player
        .tracks()
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let marker = if i == current { "♪" } else { " " };
            let item = ListItem::new(format!("{marker} {}. {} ({})", t.id, t.title, t.subtitle));
            if i == current {
                item.style(Style::default().fg(Color::LightRed))
            } else {
                item
            }
        })
        .collect();
    let list = List::new(items)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    let mut state = ListState::default();
    state.select(Some(app.track_cursor));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}
