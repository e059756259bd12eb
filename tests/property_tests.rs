//! Invariants that must hold for any pool size, player count or timing.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use proptest::prelude::*;
use quizterm::core::game::Context;
use quizterm::games::quiz::player::Player;
use quizterm::games::quiz::question::QuestionId;
use quizterm::games::quiz::scheduler::{TurnAdvance, TurnScheduler};
use quizterm::games::quiz::timer::AnswerTimer;
use quizterm::games::quiz::{Question, QuestionBank};

fn pool(n: usize) -> QuestionBank {
    let questions = (0..n)
        .map(|i| Question::new(format!("Q{i}"), vec!["a".into(), "b".into()], 1, "prop").unwrap())
        .collect();
    QuestionBank::from_questions(questions)
}

proptest! {
    #[test]
    fn assignment_never_repeats_a_question(
        pool_size in 0usize..30,
        players in 2usize..=4,
        per_player in 1usize..8,
        seed in any::<u64>(),
    ) {
        let mut bank = pool(pool_size);
        let mut seated: Vec<Player> = (0..players).map(|i| Player::new(format!("P{i}"))).collect();
        TurnScheduler::new(per_player, Some(seed)).assign(&mut seated, &mut bank);

        let mut seen = HashSet::new();
        let mut left = pool_size;
        for player in &seated {
            let got = player.assigned().len();
            prop_assert_eq!(got, per_player.min(left));
            left -= got;
            for id in player.assigned() {
                prop_assert!(id.0 < pool_size);
                prop_assert!(seen.insert(*id));
                prop_assert!(bank.get(*id).is_some_and(|q| q.is_used()));
            }
        }
        prop_assert_eq!(bank.all_unused().len(), left);
    }

    #[test]
    fn same_seed_same_assignment(pool_size in 0usize..20, seed in any::<u64>()) {
        let draw = || {
            let mut bank = pool(pool_size);
            let mut seated = vec![Player::new("A"), Player::new("B")];
            TurnScheduler::new(5, Some(seed)).assign(&mut seated, &mut bank);
            seated.iter().map(|p| p.assigned().to_vec()).collect::<Vec<_>>()
        };
        prop_assert_eq!(draw(), draw());
    }

    #[test]
    fn turn_rotation_skips_exhausted_players(
        remaining in prop::collection::vec(0usize..3, 2..=4),
    ) {
        let mut next_id = 0;
        let seated: Vec<Player> = remaining
            .iter()
            .enumerate()
            .map(|(i, &n)| {
                let mut p = Player::new(format!("P{i}"));
                p.assign((next_id..next_id + n).map(QuestionId).collect());
                next_id += n;
                p
            })
            .collect();

        let mut active = 0;
        let mut visited = Vec::new();
        loop {
            match TurnScheduler::advance_turn(&seated, &mut active) {
                TurnAdvance::Next(i) => {
                    prop_assert_eq!(i, active);
                    visited.push(i);
                }
                TurnAdvance::RoundComplete => break,
            }
            prop_assert!(visited.len() <= seated.len());
        }

        let expected: Vec<usize> = (1..seated.len()).filter(|&i| remaining[i] > 0).collect();
        prop_assert_eq!(visited, expected);
        prop_assert_eq!(active, 0);
    }

    #[test]
    fn timer_remaining_never_increases(steps in prop::collection::vec(0u64..5_000, 1..40)) {
        let (ctx, _rx) = Context::channel();
        let t0 = Instant::now();
        let mut timer = AnswerTimer::new();
        timer.start(Duration::from_secs(30), t0, &ctx);

        let mut now = t0;
        let mut last = Duration::from_secs(30);
        let mut expirations = 0;
        for ms in steps {
            now += Duration::from_millis(ms);
            let tick = timer.tick(now);
            prop_assert!(tick.remaining <= last);
            last = tick.remaining;
            expirations += usize::from(tick.expired_now);
        }
        prop_assert!(expirations <= 1);
        prop_assert_eq!(expirations == 1, now - t0 >= Duration::from_secs(30));
    }
}
