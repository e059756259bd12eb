use anyhow::Result;
use crossterm::event::EventStream;
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::core::audio::AudioSink;
use crate::core::clock::Clock;
use crate::core::game::{Command, Context, Game};
use crate::core::input::Input;
use crate::core::renderer;

/// Single owner of the game. One task, one frame at a time: input or tick,
/// then audio, then draw.
pub struct Engine<G: Game, C: Clock> {
    game: G,
    clock: C,
    audio: Box<dyn AudioSink>,
}

impl<G: Game, C: Clock> Engine<G, C> {
    pub fn new(game: G, clock: C, audio: Box<dyn AudioSink>) -> Self {
        Self { game, clock, audio }
    }

    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> Result<G> {
        let (ctx, mut outbox) = Context::channel();
        let mut events = EventStream::new();

        let mut ticker = tokio::time::interval(self.game.tick_rate());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let size = terminal.size()?;
        self.game.handle_input(
            Input::Resize { width: size.width, height: size.height },
            self.clock.now(),
            &ctx,
        );

        loop {
            let scene = self.game.scene(self.clock.now());
            terminal.draw(|f| renderer::draw(f, &scene))?;

            tokio::select! {
                // INPUT
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(event)) => {
                        if let Some(input) = Input::from_event(&event) {
                            self.game.handle_input(input, self.clock.now(), &ctx);
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        info!("terminal event stream closed");
                        break;
                    }
                },

                // TICK: timers and timed phases
                _ = ticker.tick() => {
                    self.game.on_tick(self.clock.now(), &ctx);
                }
            }

            // AUDIO: drain everything the game emitted this frame
            flush_outbox(&mut outbox, self.audio.as_mut());

            if self.game.is_finished() {
                info!("game finished");
                break;
            }
        }

        Ok(self.game)
    }
}

/// Forward every queued command to the sink, oldest first. Returns how many.
fn flush_outbox(outbox: &mut UnboundedReceiver<Command>, audio: &mut dyn AudioSink) -> usize {
    let mut sent = 0;
    while let Ok(cmd) = outbox.try_recv() {
        debug!(?cmd, "dispatching command");
        audio.dispatch(cmd);
        sent += 1;
    }
    sent
}
