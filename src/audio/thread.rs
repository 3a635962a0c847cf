use std::collections::HashMap;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::config::AudioSettings;
use crate::player::{Generation, MediaEvent, RejectReason};

use super::sink::create_sink;
use super::source::fetch;
use super::types::AudioCmd;

/// Everything the audio thread knows about what is loaded and audible.
pub(super) struct Deck {
    stream: Option<OutputStream>,
    settings: AudioSettings,
    events: Sender<MediaEvent>,
    cmd_tx: Sender<AudioCmd>,

    sink: Option<Sink>,
    loaded: Option<String>,
    /// Generation currently audible.
    playing: Option<Generation>,
    /// Source whose fetch is in flight.
    pub(super) awaiting: Option<String>,
    /// Generation that should start once `awaiting` arrives.
    pub(super) wanted: Option<Generation>,
    muted: bool,
    pub(super) cache: HashMap<String, Arc<[u8]>>,
}

impl Deck {
    /// A deck with nothing loaded. Without `stream` every start is rejected.
    pub(super) fn new(
        stream: Option<OutputStream>,
        settings: AudioSettings,
        events: Sender<MediaEvent>,
        cmd_tx: Sender<AudioCmd>,
    ) -> Self {
        Self {
            stream,
            settings,
            events,
            cmd_tx,
            sink: None,
            loaded: None,
            playing: None,
            awaiting: None,
            wanted: None,
            muted: false,
            cache: HashMap::new(),
        }
    }

    fn volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.settings.volume }
    }

    fn emit(&self, event: MediaEvent) {
        // The UI side may already be gone during shutdown.
        let _ = self.events.send(event);
    }

    fn drop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
        self.loaded = None;
        self.playing = None;
    }

    pub(super) fn start(&mut self, generation: Generation, source: String, reload: bool) {
        if self.stream.is_none() {
            self.emit(MediaEvent::Rejected(generation, RejectReason::NoOutputDevice));
            return;
        }

        if !reload && self.loaded.as_deref() == Some(source.as_str()) {
            if let Some(s) = self.sink.as_ref() {
                s.play();
                self.playing = Some(generation);
                self.wanted = None;
                self.emit(MediaEvent::Started(generation));
                return;
            }
        }

        self.drop_sink();
        self.wanted = Some(generation);

        if let Some(bytes) = self.cache.get(&source).cloned() {
            self.awaiting = None;
            self.install(source, bytes);
            return;
        }

        if self.awaiting.as_deref() == Some(source.as_str()) {
            // Same download already in flight; it will start `generation` when done.
            return;
        }

        self.awaiting = Some(source.clone());
        let tx = self.cmd_tx.clone();
        let timeout = Duration::from_secs(self.settings.fetch_timeout_secs.max(1));
        log::debug!("fetching {source} for {generation}");
        thread::spawn(move || {
            let result = fetch(&source, timeout).map(Arc::<[u8]>::from);
            let _ = tx.send(AudioCmd::Fetched { source, result });
        });
    }

    pub(super) fn fetched(&mut self, source: String, result: Result<Arc<[u8]>, RejectReason>) {
        if self.awaiting.as_deref() != Some(source.as_str()) {
            log::debug!("dropping superseded fetch of {source}");
            if let Ok(bytes) = result {
                self.cache.insert(source, bytes);
            }
            return;
        }
        self.awaiting = None;

        match result {
            Ok(bytes) => {
                self.cache.insert(source.clone(), bytes.clone());
                self.install(source, bytes);
            }
            Err(reason) => {
                if let Some(g) = self.wanted.take() {
                    self.emit(MediaEvent::Rejected(g, reason));
                }
            }
        }
    }

    /// Decode `bytes` into a fresh paused sink, then start it if an attempt wants it.
    fn install(&mut self, source: String, bytes: Arc<[u8]>) {
        let Some(stream) = self.stream.as_ref() else {
            if let Some(g) = self.wanted.take() {
                self.emit(MediaEvent::Rejected(g, RejectReason::NoOutputDevice));
            }
            return;
        };

        match create_sink(stream, bytes, &source, self.volume()) {
            Ok(sink) => {
                if let Some(g) = self.wanted.take() {
                    sink.play();
                    self.playing = Some(g);
                    self.emit(MediaEvent::Started(g));
                }
                self.sink = Some(sink);
                self.loaded = Some(source);
            }
            Err(reason) => {
                self.cache.remove(&source);
                if let Some(g) = self.wanted.take() {
                    self.emit(MediaEvent::Rejected(g, reason));
                }
            }
        }
    }

    pub(super) fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
        self.playing = None;
        self.wanted = None;
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        let volume = self.volume();
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(volume);
        }
    }

    /// Periodic check for a stream that played to its end.
    fn check_ended(&mut self) {
        let finished = match (self.sink.as_ref(), self.playing) {
            (Some(s), Some(g)) if s.empty() => Some(g),
            _ => None,
        };
        if let Some(g) = finished {
            self.drop_sink();
            self.emit(MediaEvent::Ended(g));
        }
    }
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    cmd_tx: Sender<AudioCmd>,
    events: Sender<MediaEvent>,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
                // but noisy for a TUI app.
                stream.log_on_drop(false);
                Some(stream)
            }
            Err(e) => {
                log::warn!("no audio output device, playback will be rejected: {e}");
                None
            }
        };

        let mut deck = Deck::new(stream, audio_settings, events, cmd_tx);

        fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
            if fade_out_ms == 0 {
                sink.set_volume(0.0);
                return;
            }
            let steps: u64 = 20;
            let step_ms = (fade_out_ms / steps).max(1);
            for step in 1..=steps {
                let t = step as f32 / steps as f32;
                sink.set_volume(from * (1.0 - t));
                thread::sleep(Duration::from_millis(step_ms));
            }
            sink.set_volume(0.0);
        }

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    AudioCmd::Start {
                        generation,
                        source,
                        reload,
                    } => deck.start(generation, source, reload),
                    AudioCmd::Pause => deck.pause(),
                    AudioCmd::SetMuted(muted) => deck.set_muted(muted),
                    AudioCmd::Fetched { source, result } => deck.fetched(source, result),
                    AudioCmd::Quit { fade_out_ms } => {
                        if let Some(ref s) = deck.sink {
                            if deck.playing.is_some() {
                                // Fade out gently before stopping.
                                fade_out_sink(s, deck.volume(), fade_out_ms);
                            }
                            s.stop();
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => deck.check_ended(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
