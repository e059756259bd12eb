use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::games::quiz::player::Player;
use crate::games::quiz::question::{Question, QuestionBank, QuestionId};

/// Result of rotating the turn after the active player ran out of questions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnAdvance {
    /// Another player still has questions
    Next(usize),
    /// Rotation wrapped back to the first player
    RoundComplete,
}

/// Hands out question queues and decides whose turn it is
#[derive(Debug)]
pub struct TurnScheduler {
    rng: StdRng,
    questions_per_player: usize,
}

impl TurnScheduler {
    pub fn new(questions_per_player: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng, questions_per_player }
    }

    /// Give every player a random queue drawn from the unused pool.
    ///
    /// The pool shrinks as it goes: later players may get fewer questions, or
    /// none, when the bank runs dry.
    pub fn assign(&mut self, players: &mut [Player], bank: &mut QuestionBank) {
        for player in players.iter_mut() {
            let unused = bank.all_unused();
            let amount = self.questions_per_player.min(unused.len());
            let picked: Vec<QuestionId> = index::sample(&mut self.rng, unused.len(), amount)
                .into_iter()
                .map(|i| unused[i])
                .collect();

            bank.mark_used(&picked);
            info!(player=%player.name, assigned=picked.len(), "questions assigned");
            player.assign(picked);
        }
    }

    pub fn current_question<'a>(player: &Player, bank: &'a QuestionBank) -> Option<(QuestionId, &'a Question)> {
        let id = player.current()?;
        bank.get(id).map(|q| (id, q))
    }

    /// Rotate `active` to the next player who still has a question, skipping
    /// exhausted ones. Signals [`TurnAdvance::RoundComplete`] as soon as the
    /// rotation wraps past the last player; `active` is then 0.
    pub fn advance_turn(players: &[Player], active: &mut usize) -> TurnAdvance {
        loop {
            if Self::rotate(active, players.len()) {
                return TurnAdvance::RoundComplete;
            }
            if !players[*active].is_exhausted() {
                return TurnAdvance::Next(*active);
            }
            debug!(player=%players[*active].name, "skipping player with no questions left");
        }
    }

    /// Step `active` forward modulo `count`. True when it wrapped to 0.
    pub fn rotate(active: &mut usize, count: usize) -> bool {
        if count == 0 {
            *active = 0;
            return true;
        }
        *active = (*active + 1) % count;
        *active == 0
    }
}
