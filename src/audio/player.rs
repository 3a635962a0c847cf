use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::AudioSettings;
use crate::player::{MediaCommand, MediaEvent};

use super::thread::spawn_audio_thread;
use super::types::AudioCmd;

pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    events: Receiver<MediaEvent>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(audio_settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, events) = mpsc::channel::<MediaEvent>();

        let audio_handle = spawn_audio_thread(rx, tx.clone(), event_tx, audio_settings);

        Self {
            tx,
            events,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    fn send(&self, cmd: AudioCmd) -> Result<(), mpsc::SendError<AudioCmd>> {
        self.tx.send(cmd)
    }

    /// Forward a selector command to the audio thread.
    pub fn execute(&self, cmd: MediaCommand) {
        let cmd = match cmd {
            MediaCommand::Start {
                generation,
                source,
                reload,
            } => AudioCmd::Start {
                generation,
                source,
                reload,
            },
            MediaCommand::Pause => AudioCmd::Pause,
            MediaCommand::SetMuted(muted) => AudioCmd::SetMuted(muted),
        };
        if let Err(e) = self.send(cmd) {
            log::error!("audio thread is gone, dropped {:?}", e.0);
        }
    }

    /// Outcomes reported since the last call, oldest first.
    pub fn drain_events(&self) -> Vec<MediaEvent> {
        self.events.try_iter().collect()
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
