use std::cmp::Reverse;

use crate::config::POINTS_PER_CORRECT;
use crate::games::quiz::player::Player;
use crate::games::quiz::question::Question;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub points_awarded: u32,
    pub correct_option_text: String,
    /// `None` when the timer ran out
    pub selected: Option<usize>,
}

impl AnswerOutcome {
    pub fn timed_out(&self) -> bool {
        self.selected.is_none()
    }
}

pub struct ScoreKeeper;

impl ScoreKeeper {
    /// Score one answer. Only a correct answer touches the player.
    pub fn record_answer(player: &mut Player, question: &Question, selected: Option<usize>) -> AnswerOutcome {
        let correct = selected == Some(question.correct_index());
        let points_awarded = if correct { POINTS_PER_CORRECT } else { 0 };
        if correct {
            player.credit(points_awarded);
        }

        AnswerOutcome {
            correct,
            points_awarded,
            correct_option_text: question.correct_option().to_string(),
            selected,
        }
    }

    /// Highest score first; equal scores keep their seating order
    pub fn standings(players: &[Player]) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = players.iter().collect();
        ranked.sort_by_key(|p| Reverse(p.score()));
        ranked
    }

    pub fn max_score(players: &[Player]) -> u32 {
        players.iter().map(Player::score).max().unwrap_or(0)
    }

    /// Everyone tied at the top score
    pub fn winners(players: &[Player]) -> Vec<&Player> {
        let top = Self::max_score(players);
        players.iter().filter(|p| p.score() == top).collect()
    }
}
