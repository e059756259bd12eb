/// Core game interface for the quizterm engine
use std::time::{Duration, Instant};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::core::input::Input;
use crate::core::scene::Scene;

/// Sound cues the game can ask the audio collaborator for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Correct,
    Wrong,
    Timer,
}

/// Fire-and-forget output produced by a game; nothing is returned to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    PlaySound(Sound),
    LoopSound(Sound),
    StopSound(Sound),
}

/// Outbox handed to the game on every call. The engine drains it once per frame.
#[derive(Clone)]
pub struct Context {
    pub tx: UnboundedSender<Command>,
}

impl Context {
    /// Create a context together with the receiving end the engine drains
    pub fn channel() -> (Self, UnboundedReceiver<Command>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn send(&self, cmd: Command) {
        // A closed receiver means the engine is shutting down.
        let _ = self.tx.send(cmd);
    }

    pub fn play(&self, sound: Sound) {
        self.send(Command::PlaySound(sound));
    }

    pub fn loop_sound(&self, sound: Sound) {
        self.send(Command::LoopSound(sound));
    }

    pub fn stop_sound(&self, sound: Sound) {
        self.send(Command::StopSound(sound));
    }
}

/// Main game trait driven by [`crate::core::engine::Engine`].
///
/// Every method receives the current instant instead of reading a clock, so a
/// game can be driven from tests without a terminal.
pub trait Game {
    /// Action attached to clickable scene buttons
    type Action: Clone;

    /// How often `on_tick` is called
    fn tick_rate(&self) -> Duration;

    fn handle_input(&mut self, input: Input, now: Instant, ctx: &Context);

    fn on_tick(&mut self, now: Instant, ctx: &Context);

    /// Describe the current frame. Pure: never mutates the game.
    fn scene(&self, now: Instant) -> Scene<Self::Action>;

    /// True once the player asked to leave the program
    fn is_finished(&self) -> bool;
}
