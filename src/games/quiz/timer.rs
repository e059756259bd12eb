use std::time::{Duration, Instant};

use tracing::warn;

use crate::core::game::{Context, Sound};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running { started: Instant, limit: Duration },
    Expired,
}

/// Outcome of one [`AnswerTimer::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub remaining: Duration,
    /// Set on exactly one tick: the one that moved the timer to `Expired`
    pub expired_now: bool,
}

/// Countdown for a single answer window
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerTimer {
    state: TimerState,
}

impl Default for AnswerTimer {
    fn default() -> Self {
        Self::new()
    }
}

impl AnswerTimer {
    pub fn new() -> Self {
        Self { state: TimerState::Idle }
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, TimerState::Running { .. })
    }

    /// Begin a window and its looping cue. The caller owns stopping the cue.
    pub fn start(&mut self, limit: Duration, now: Instant, ctx: &Context) {
        if self.is_running() {
            warn!("answer timer restarted while still running");
        }
        self.state = TimerState::Running { started: now, limit };
        ctx.loop_sound(Sound::Timer);
    }

    /// Time left at `now` without changing state
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.state {
            TimerState::Running { started, limit } => limit.saturating_sub(now.saturating_duration_since(started)),
            TimerState::Idle | TimerState::Expired => Duration::ZERO,
        }
    }

    pub fn tick(&mut self, now: Instant) -> TimerTick {
        let remaining = self.remaining(now);
        let expired_now = self.is_running() && remaining.is_zero();
        if expired_now {
            self.state = TimerState::Expired;
        }
        TimerTick { remaining, expired_now }
    }

    pub fn stop(&mut self) {
        self.state = TimerState::Idle;
    }
}

/// Whole seconds for display, rounded up so "0" only shows once time is out
pub fn display_secs(remaining: Duration) -> u64 {
    remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
}
