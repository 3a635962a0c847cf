use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Msg};
use crate::audio::AudioPlayer;
use crate::config;
use crate::effects::Backdrop;
use crate::error::Error;
use crate::runtime::keymap::{Action, action_for};
use crate::ui;

/// Main terminal event loop: drains backend events, draws, then handles
/// at most one key press. Returns `Ok(())` when the user quits; stopping the
/// audio and restoring the terminal is up to the caller.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    audio_player: &AudioPlayer,
    backdrop: &Backdrop,
) -> Result<(), Error> {
    let tick = Duration::from_millis(settings.ui.tick_ms);

    loop {
        let now = Instant::now();

        // Playback outcomes and natural track ends from the audio thread.
        for media_event in audio_player.drain_events() {
            dispatch(app, audio_player, Msg::Media(media_event), now);
        }
        dispatch(app, audio_player, Msg::Tick, now);

        terminal.draw(|f| ui::draw(f, app, backdrop, &settings.ui, now))?;

        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match action_for(key, app) {
                    Some(Action::Quit) => break,
                    Some(Action::Send(msg)) => dispatch(app, audio_player, msg, Instant::now()),
                    None => {}
                }
            }
        }
    }

    Ok(())
}

fn dispatch(app: &mut App, audio_player: &AudioPlayer, msg: Msg, now: Instant) {
    if let Some(cmd) = app.update(msg, now) {
        audio_player.execute(cmd);
    }
}
