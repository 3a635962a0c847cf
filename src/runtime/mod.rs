use std::io;
use std::time::{Duration, Instant};

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioPlayer;
use crate::effects::Backdrop;
use crate::error::Error;

mod event_loop;
mod guard;
mod keymap;
mod logging;
mod settings;
mod startup;


use guard::OnExit;

pub fn run() -> Result<(), Error> {
    let settings::Loaded { settings, warning } = settings::load_settings();

    let log_path = logging::init(&settings.logging);
    log::info!("serenade {} starting", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &log_path {
        log::debug!("logging to {}", path.display());
    }
    if let Some(msg) = warning {
        log::warn!("{msg}");
    }

    let now = Instant::now();
    let mut app = App::new(&settings, now)?;
    let audio_player = AudioPlayer::new(settings.audio.clone());
    startup::apply_playback_defaults(&mut app, &audio_player, &settings);

    let backdrop = Backdrop::generate(&mut rand::rng(), settings.ui.sparkles, settings.ui.flowers);

    // Stops the audio on every exit path, after the terminal is restored.
    let fade_out = Duration::from_millis(settings.audio.quit_fade_out_ms);
    let _audio = OnExit::new(|| audio_player.quit_softly(fade_out));

    enable_raw_mode()?;
    let _terminal_restore = OnExit::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app, &audio_player, &backdrop);
    if let Err(e) = &run_result {
        log::error!("event loop failed: {e}");
    }
    run_result
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        log::warn!("could not leave raw mode: {e}");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        log::warn!("could not restore the screen: {e}");
    }
}
