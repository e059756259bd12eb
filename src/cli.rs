use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::config::{GameConfig, FEEDBACK_DELAY, QUESTIONS_PER_PLAYER, QUESTION_TIME_LIMIT};

#[derive(Parser, Debug)]
#[command(name = "quizterm")]
#[command(about = "Local multiplayer trivia in your terminal")]
#[command(version)]
pub struct Cli {
    /// Extra questions in JSON; missing or malformed files are ignored
    #[arg(short, long, default_value = "questions.json")]
    pub questions: PathBuf,

    /// Seconds allowed per question
    #[arg(short, long, default_value_t = QUESTION_TIME_LIMIT.as_secs())]
    pub time_limit: u64,

    /// Questions drawn for each player
    #[arg(long, default_value_t = QUESTIONS_PER_PLAYER)]
    pub questions_per_player: usize,

    /// How long answer feedback stays on screen, in milliseconds
    #[arg(long, default_value_t = FEEDBACK_DELAY.as_millis() as u64)]
    pub feedback_ms: u64,

    /// Seed for question sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// Disable the terminal bell
    #[arg(long)]
    pub mute: bool,

    /// Log file (defaults to quizterm.log in the temp directory)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            questions_per_player: self.questions_per_player,
            question_time_limit: Duration::from_secs(self.time_limit.max(1)),
            feedback_delay: Duration::from_millis(self.feedback_ms),
            seed: self.seed,
            ..GameConfig::default()
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("quizterm.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let cli = Cli::parse_from(["quizterm"]);
        assert_eq!(cli.game_config(), GameConfig::default());
        assert_eq!(cli.questions, PathBuf::from("questions.json"));
        assert!(!cli.mute);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "quizterm",
            "--time-limit",
            "0",
            "--questions-per-player",
            "3",
            "--feedback-ms",
            "500",
            "--seed",
            "7",
        ]);
        let config = cli.game_config();
        assert_eq!(config.question_time_limit, Duration::from_secs(1));
        assert_eq!(config.questions_per_player, 3);
        assert_eq!(config.feedback_delay, Duration::from_millis(500));
        assert_eq!(config.seed, Some(7));
    }
}
