use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use tracing::{debug, info};

use crate::config::{GameConfig, MAX_PLAYERS, MIN_PLAYERS};
use crate::core::game::{Context, Game, Sound};
use crate::core::input::Input;
use crate::core::scene::Scene;
use crate::games::quiz::intent::{self, Intent};
use crate::games::quiz::player::Player;
use crate::games::quiz::question::QuestionBank;
use crate::games::quiz::scheduler::{TurnAdvance, TurnScheduler};
use crate::games::quiz::score::ScoreKeeper;
use crate::games::quiz::screens;
use crate::games::quiz::session::{Phase, PhaseKind, Session};

/// Terminal size assumed until the engine reports the real one
const DEFAULT_VIEWPORT: Rect = Rect { x: 0, y: 0, width: 80, height: 24 };

/// Owns the session, the question bank and the screen flow. Every change to
/// game state goes through `handle_input` or `on_tick`.
pub struct QuizMachine {
    config: GameConfig,
    bank: QuestionBank,
    scheduler: TurnScheduler,
    session: Session,
    viewport: Rect,
    finished: bool,
}

impl QuizMachine {
    pub fn new(config: GameConfig, bank: QuestionBank) -> Self {
        let scheduler = TurnScheduler::new(config.questions_per_player, config.seed);
        Self {
            config,
            bank,
            scheduler,
            session: Session::new(),
            viewport: DEFAULT_VIEWPORT,
            finished: false,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn phase(&self) -> &Phase {
        &self.session.phase
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    /// Drop the current session and start over at the menu with every
    /// question eligible again.
    pub fn reset_session(&mut self, ctx: &Context) {
        self.stop_timer(ctx);
        self.session = Session::new();
        self.bank.reset();
        info!("session reset");
    }

    /// Apply one intent according to the transition table. Intents that make
    /// no sense for the current phase are ignored.
    pub fn apply(&mut self, intent: Intent, now: Instant, ctx: &Context) {
        let phase = self.session.phase.kind();
        match (phase, intent) {
            (_, Intent::Quit) => self.quit(ctx),

            (PhaseKind::Menu, Intent::Start) => self.enter(Phase::PlayerCountSelect),
            (PhaseKind::Menu, Intent::Help) => self.enter(Phase::Help),
            (PhaseKind::Help, Intent::Dismiss) => self.enter(Phase::Menu),

            (PhaseKind::PlayerCountSelect, Intent::ChooseCount(n)) => self.choose_count(n),
            (PhaseKind::PlayerCountSelect, Intent::Cancel) => self.enter(Phase::Menu),

            (PhaseKind::NameEntry, Intent::Type(c)) => self.type_char(c),
            (PhaseKind::NameEntry, Intent::Erase) => self.erase_char(),
            (PhaseKind::NameEntry, Intent::SubmitName) => self.submit_name(now, ctx),
            (PhaseKind::NameEntry, Intent::Cancel) => {
                self.session.players.clear();
                self.enter(Phase::PlayerCountSelect);
            }

            (PhaseKind::Question, Intent::Answer(i)) => self.answer(i, now, ctx),
            (PhaseKind::Question, Intent::Cancel) => {
                info!("game abandoned");
                self.reset_session(ctx);
            }

            (PhaseKind::Results, Intent::Dismiss) => self.reset_session(ctx),

            (phase, intent) => debug!(?phase, ?intent, "intent ignored"),
        }
    }

    fn enter(&mut self, phase: Phase) {
        debug_assert!(
            !phase.kind().is_gameplay() || self.session.active < self.session.players.len(),
            "gameplay phase without an active player"
        );
        info!(from=?self.session.phase.kind(), to=?phase.kind(), "phase change");
        self.session.phase = phase;
    }

    fn quit(&mut self, ctx: &Context) {
        self.stop_timer(ctx);
        self.finished = true;
        info!("quit requested");
    }

    fn stop_timer(&mut self, ctx: &Context) {
        if self.session.timer.is_running() {
            self.session.timer.stop();
            ctx.stop_sound(Sound::Timer);
        }
    }

    fn choose_count(&mut self, n: usize) {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&n) {
            debug!(n, "player count rejected");
            return;
        }
        self.session.players.clear();
        self.enter(Phase::NameEntry { expected: n, input: String::new() });
    }

    fn type_char(&mut self, c: char) {
        let max = self.config.max_name_length;
        if let Phase::NameEntry { input, .. } = &mut self.session.phase {
            if input.chars().count() < max {
                input.push(c);
            }
        }
    }

    fn erase_char(&mut self) {
        if let Phase::NameEntry { input, .. } = &mut self.session.phase {
            input.pop();
        }
    }

    fn submit_name(&mut self, now: Instant, ctx: &Context) {
        let Phase::NameEntry { expected, input } = &mut self.session.phase else {
            return;
        };
        let name = input.trim().to_string();
        if name.is_empty() {
            debug!("blank name rejected");
            return;
        }
        input.clear();
        let expected = *expected;

        info!(player=%name, seat=self.session.players.len(), "player joined");
        self.session.players.push(Player::new(name));

        if self.session.players.len() == expected {
            self.start_round(now, ctx);
        }
    }

    fn start_round(&mut self, now: Instant, ctx: &Context) {
        self.scheduler.assign(&mut self.session.players, &mut self.bank);
        self.session.active = 0;
        self.begin_question(now, ctx);
    }

    /// Show the active player's current question and start the countdown
    fn begin_question(&mut self, now: Instant, ctx: &Context) {
        let current = self
            .session
            .active_player()
            .and_then(|player| TurnScheduler::current_question(player, &self.bank))
            .map(|(id, _)| id);
        match current {
            Some(question) => {
                self.enter(Phase::Question { question });
                self.session.timer.start(self.config.question_time_limit, now, ctx);
            }
            None => self.next_turn(now, ctx),
        }
    }

    /// Active player is out of questions: rotate, or finish the round
    fn next_turn(&mut self, now: Instant, ctx: &Context) {
        match TurnScheduler::advance_turn(&self.session.players, &mut self.session.active) {
            TurnAdvance::Next(_) => self.begin_question(now, ctx),
            TurnAdvance::RoundComplete => self.enter(Phase::Results),
        }
    }

    fn answer(&mut self, index: usize, now: Instant, ctx: &Context) {
        let Phase::Question { question } = self.session.phase else {
            return;
        };
        let options = self.bank.get(question).map_or(0, |q| q.options().len());
        if index >= options {
            debug!(index, options, "answer out of range");
            return;
        }

        self.stop_timer(ctx);
        self.resolve(Some(index), now, ctx);
    }

    /// Score the current question and show feedback. `None` means time ran out.
    fn resolve(&mut self, selected: Option<usize>, now: Instant, ctx: &Context) {
        let Phase::Question { question } = self.session.phase else {
            return;
        };
        let (Some(player), Some(q)) = (self.session.players.get_mut(self.session.active), self.bank.get(question))
        else {
            return;
        };

        let outcome = ScoreKeeper::record_answer(player, q, selected);
        info!(
            player=%player.name,
            ?selected,
            correct=outcome.correct,
            score=player.score(),
            "answer recorded"
        );
        ctx.play(if outcome.correct { Sound::Correct } else { Sound::Wrong });

        let until = now + self.config.feedback_delay;
        self.enter(Phase::Feedback { question, outcome, until });
    }

    fn finish_feedback(&mut self, now: Instant, ctx: &Context) {
        let Some(player) = self.session.players.get_mut(self.session.active) else {
            return;
        };
        player.advance();

        if player.is_exhausted() {
            self.next_turn(now, ctx);
        } else {
            self.begin_question(now, ctx);
        }
    }

    /// Time left on the running question, zero otherwise
    pub fn time_remaining(&self, now: Instant) -> Duration {
        self.session.timer.remaining(now)
    }
}

impl Game for QuizMachine {
    type Action = Intent;

    fn tick_rate(&self) -> Duration {
        self.config.tick_rate
    }

    fn handle_input(&mut self, input: Input, now: Instant, ctx: &Context) {
        if let Input::Resize { width, height } = input {
            self.viewport = Rect::new(0, 0, width, height);
            return;
        }

        let phase = self.session.phase.kind();
        let intent = intent::interpret(phase, &input, |column, row| self.scene(now).hit(column, row));
        match intent {
            Some(intent) => self.apply(intent, now, ctx),
            None => debug!(?phase, ?input, "input ignored"),
        }
    }

    fn on_tick(&mut self, now: Instant, ctx: &Context) {
        match self.session.phase {
            Phase::Question { .. } => {
                if self.session.timer.tick(now).expired_now {
                    info!("answer window expired");
                    ctx.stop_sound(Sound::Timer);
                    self.resolve(None, now, ctx);
                }
            }
            Phase::Feedback { until, .. } if now >= until => self.finish_feedback(now, ctx),
            _ => {}
        }
    }

    fn scene(&self, now: Instant) -> Scene<Intent> {
        screens::build(self, now)
    }

    fn is_finished(&self) -> bool {
        self.finished
    }
}
