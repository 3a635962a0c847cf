//! The invitation card and its dodging "No" button.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::{centered_rect_sized, padded};
use crate::app::{App, InvitationStage};

const CARD_WIDTH: u16 = 64;
const CARD_HEIGHT: u16 = 12;
const BUTTON_WIDTH: u16 = 9;

pub(super) fn draw(frame: &mut Frame, app: &App, area: Rect) {
    let card = centered_rect_sized(CARD_WIDTH, CARD_HEIGHT, area);
    let texts = &app.texts;

    let lines: Vec<Line> = match app.stage {
        InvitationStage::Cover => vec![
            Line::from("✉").bold().fg(Color::LightRed),
            Line::from(""),
            Line::from(texts.invitation_title.as_str()).bold(),
            Line::from(texts.invitation_from.as_str()).italic(),
            Line::from(""),
            Line::from("press enter to open").dim(),
        ],
        InvitationStage::Asking => vec![
            Line::from("♥").fg(Color::LightRed),
            Line::from(""),
            Line::from(texts.question.as_str()).bold(),
        ],
        InvitationStage::Accepted => vec![
            Line::from("♥ ♥ ♥").fg(Color::LightRed),
            Line::from(""),
            Line::from(texts.accepted.as_str()).bold(),
            Line::from(""),
            Line::from(texts.change_mind_hint.as_str()).dim(),
        ],
        InvitationStage::Final => {
            let mut lines = vec![
                Line::from("♥").fg(Color::LightRed),
                Line::from(""),
                Line::from(texts.final_words.as_str()).bold(),
            ];
            if app.is_revealed() {
                lines.push(Line::from(""));
                lines.push(Line::from("press tab to see what else is here").dim());
            }
            lines
        }
    };

    let body = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::LightRed))
                .padding(padded()),
        );
    frame.render_widget(Clear, card);
    frame.render_widget(body, card);

    if app.stage == InvitationStage::Asking {
        draw_buttons(frame, app, card, area);
    }
}

/// "Yes" sits under the question; "No" is drawn at its dodge offset, kept
/// inside `bounds`.
fn draw_buttons(frame: &mut Frame, app: &App, card: Rect, bounds: Rect) {
    if card.height < 4 || bounds.width < BUTTON_WIDTH * 2 {
        return;
    }
    let y = card.bottom().saturating_sub(3);
    let center = card.x + card.width / 2;

    let yes = Rect {
        x: center.saturating_sub(BUTTON_WIDTH + 1).max(bounds.x),
        y,
        width: BUTTON_WIDTH,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new("[y] Yes")
            .alignment(Alignment::Center)
            .bold()
            .fg(Color::Black)
            .bg(Color::LightRed),
        yes,
    );

    let home_x = i32::from(center) + 1;
    let x = (home_x + i32::from(app.no_offset.x)).clamp(
        i32::from(bounds.x),
        i32::from(bounds.right() - BUTTON_WIDTH),
    );
    let y = (i32::from(y) + i32::from(app.no_offset.y))
        .clamp(i32::from(bounds.y), i32::from(bounds.bottom() - 1));
    let no = Rect {
        x: x as u16,
        y: y as u16,
        width: BUTTON_WIDTH,
        height: 1,
    };
    frame.render_widget(
        Paragraph::new("[n] No")
            .alignment(Alignment::Center)
            .fg(Color::Gray),
        no,
    );
}
