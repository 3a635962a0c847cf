//! Translate key presses into app messages, depending on what is on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, GalleryState, InvitationStage, Msg, Section};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Send(Msg),
}

pub fn action_for(key: KeyEvent, app: &App) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Action::Quit);
        }
        KeyCode::Tab if app.is_revealed() => return Some(Action::Send(Msg::FocusNext)),
        KeyCode::BackTab if app.is_revealed() => return Some(Action::Send(Msg::FocusPrev)),
        _ => {}
    }

    let msg = match app.focus {
        Section::Proposal => proposal_key(key.code, app),
        Section::Note => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::ToggleNote),
            _ => None,
        },
        Section::Gallery => match (key.code, app.gallery) {
            (KeyCode::Enter | KeyCode::Char(' '), GalleryState::Camera) => {
                Some(Msg::CaptureMemories)
            }
            (KeyCode::Enter | KeyCode::Char('r'), GalleryState::Open) => Some(Msg::ResetCamera),
            _ => None,
        },
        Section::Reasons => None,
        Section::Player => player_key(key.code),
    };
    msg.map(Action::Send)
}

fn proposal_key(code: KeyCode, app: &App) -> Option<Msg> {
    match (app.stage, code) {
        (InvitationStage::Cover, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('o')) => {
            Some(Msg::OpenInvitation)
        }
        (InvitationStage::Asking, KeyCode::Enter | KeyCode::Char('y')) => Some(Msg::Accept),
        (InvitationStage::Asking, KeyCode::Char('n')) => Some(Msg::DodgeNo),
        (InvitationStage::Accepted, KeyCode::Char('n')) => Some(Msg::ChangeMind),
        (InvitationStage::Final, KeyCode::Down | KeyCode::Char('j')) if app.is_revealed() => {
            Some(Msg::FocusNext)
        }
        _ => None,
    }
}

fn player_key(code: KeyCode) -> Option<Msg> {
    match code {
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Msg::TogglePlay),
        KeyCode::Char('l') | KeyCode::Right => Some(Msg::NextTrack),
        KeyCode::Char('h') | KeyCode::Left => Some(Msg::PrevTrack),
        KeyCode::Char('j') | KeyCode::Down => Some(Msg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Msg::CursorUp),
        KeyCode::Enter => Some(Msg::PlaySelected),
        KeyCode::Char('m') => Some(Msg::ToggleMute),
        KeyCode::Char(c @ '1'..='9') => Some(Msg::SelectTrack(c as usize - '1' as usize)),
        _ => None,
    }
}
