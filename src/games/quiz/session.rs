use std::time::Instant;

use crate::games::quiz::player::Player;
use crate::games::quiz::question::QuestionId;
use crate::games::quiz::score::AnswerOutcome;
use crate::games::quiz::timer::AnswerTimer;

/// Screen the game is on, with the data only that screen needs
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Menu,
    Help,
    PlayerCountSelect,
    NameEntry { expected: usize, input: String },
    Question { question: QuestionId },
    /// Timed, cannot be skipped
    Feedback { question: QuestionId, outcome: AnswerOutcome, until: Instant },
    Results,
}

/// Data-free mirror of [`Phase`] for matching transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Menu,
    Help,
    PlayerCountSelect,
    NameEntry,
    Question,
    Feedback,
    Results,
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Menu => PhaseKind::Menu,
            Phase::Help => PhaseKind::Help,
            Phase::PlayerCountSelect => PhaseKind::PlayerCountSelect,
            Phase::NameEntry { .. } => PhaseKind::NameEntry,
            Phase::Question { .. } => PhaseKind::Question,
            Phase::Feedback { .. } => PhaseKind::Feedback,
            Phase::Results => PhaseKind::Results,
        }
    }
}

impl PhaseKind {
    /// Phases during which `active` must point at a real player
    pub fn is_gameplay(self) -> bool {
        matches!(self, PhaseKind::Question | PhaseKind::Feedback)
    }
}

/// Everything that belongs to one game from player-count selection to results.
/// Replaced wholesale on reset.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) players: Vec<Player>,
    pub(crate) active: usize,
    pub(crate) phase: Phase,
    pub(crate) timer: AnswerTimer,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            active: 0,
            phase: Phase::Menu,
            timer: AnswerTimer::new(),
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_player(&self) -> Option<&Player> {
        self.players.get(self.active)
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn timer(&self) -> &AnswerTimer {
        &self.timer
    }
}
