//! Game constants and the runtime configuration built from them.

use std::time::Duration;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const QUESTIONS_PER_PLAYER: usize = 5;
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 4;
pub const MAX_NAME_LENGTH: usize = 20;
pub const QUESTION_TIME_LIMIT: Duration = Duration::from_secs(30);
pub const FEEDBACK_DELAY: Duration = Duration::from_secs(2);
pub const POINTS_PER_CORRECT: u32 = 10;
/// Roughly 60 frames per second
pub const TICK_RATE: Duration = Duration::from_millis(16);

/// Timer bar turns red at or below this many seconds
pub const LOW_TIME_WARNING: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub questions_per_player: usize,
    pub question_time_limit: Duration,
    pub feedback_delay: Duration,
    pub max_name_length: usize,
    pub tick_rate: Duration,
    /// Fixed RNG seed for reproducible question draws
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            questions_per_player: QUESTIONS_PER_PLAYER,
            question_time_limit: QUESTION_TIME_LIMIT,
            feedback_delay: FEEDBACK_DELAY,
            max_name_length: MAX_NAME_LENGTH,
            tick_rate: TICK_RATE,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_questions_per_player(mut self, n: usize) -> Self {
        self.questions_per_player = n;
        self
    }
}
