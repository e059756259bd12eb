/// Audio collaborators. The engine forwards every drained [`Command`] here.
use std::collections::HashSet;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::core::game::{Command, Sound};

pub trait AudioSink {
    fn play(&mut self, sound: Sound);
    fn start_loop(&mut self, sound: Sound);
    fn stop(&mut self, sound: Sound);

    fn dispatch(&mut self, cmd: Command) {
        match cmd {
            Command::PlaySound(sound) => self.play(sound),
            Command::LoopSound(sound) => self.start_loop(sound),
            Command::StopSound(sound) => self.stop(sound),
        }
    }
}

/// Rings the terminal bell for one-shot cues. Loops are tracked but silent,
/// a looping bell would drown out everything else.
#[derive(Debug, Default)]
pub struct TerminalBell {
    looping: HashSet<Sound>,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_looping(&self, sound: Sound) -> bool {
        self.looping.contains(&sound)
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, sound: Sound) {
        debug!(?sound, "bell");
        let mut out = io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            warn!(error=?e, "failed to ring terminal bell");
        }
    }

    fn start_loop(&mut self, sound: Sound) {
        debug!(?sound, "loop started");
        self.looping.insert(sound);
    }

    fn stop(&mut self, sound: Sound) {
        if self.looping.remove(&sound) {
            debug!(?sound, "loop stopped");
        }
    }
}

/// Sink used with `--mute`
#[derive(Debug, Default)]
pub struct Muted;

impl AudioSink for Muted {
    fn play(&mut self, sound: Sound) {
        debug!(?sound, "muted play");
    }

    fn start_loop(&mut self, _sound: Sound) {}

    fn stop(&mut self, _sound: Sound) {}
}
