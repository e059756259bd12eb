//! Whole games driven through the same inputs the terminal would deliver.

use std::time::Duration;

use quizterm::config::GameConfig;
use quizterm::core::clock::{Clock, ManualClock};
use quizterm::core::game::{Command, Context, Game, Sound};
use quizterm::core::input::{Input, Key};
use quizterm::games::quiz::score::ScoreKeeper;
use quizterm::games::quiz::{Phase, Question, QuestionBank, QuizMachine};
use tokio::sync::mpsc::UnboundedReceiver;

fn pool(n: usize) -> QuestionBank {
    let questions = (0..n)
        .map(|i| {
            Question::new(
                format!("Question {i}"),
                vec!["correct".into(), "wrong".into(), "also wrong".into()],
                0,
                "General",
            )
            .unwrap()
        })
        .collect();
    QuestionBank::from_questions(questions)
}

fn press(m: &mut QuizMachine, clock: &ManualClock, ctx: &Context, key: Key) {
    m.handle_input(Input::Key(key), clock.now(), ctx);
}

fn type_name(m: &mut QuizMachine, clock: &ManualClock, ctx: &Context, name: &str) {
    for c in name.chars() {
        press(m, clock, ctx, Key::Char(c));
    }
    press(m, clock, ctx, Key::Enter);
}

fn seat(m: &mut QuizMachine, clock: &ManualClock, ctx: &Context, names: &[&str]) {
    press(m, clock, ctx, Key::Char('1'));
    let count = char::from_digit(names.len() as u32, 10).unwrap();
    press(m, clock, ctx, Key::Char(count));
    for name in names {
        type_name(m, clock, ctx, name);
    }
}

/// Answer with `key`, then let the feedback screen run out
fn answer(m: &mut QuizMachine, clock: &ManualClock, ctx: &Context, key: char) {
    press(m, clock, ctx, Key::Char(key));
    assert!(matches!(m.phase(), Phase::Feedback { .. }));
    let delay = m.config().feedback_delay;
    m.on_tick(clock.advance(delay), ctx);
}

fn drain(rx: &mut UnboundedReceiver<Command>) -> Vec<Command> {
    let mut out = Vec::new();
    while let Ok(cmd) = rx.try_recv() {
        out.push(cmd);
    }
    out
}

#[test]
fn test_small_pool_goes_to_first_player_only() {
    let (ctx, _rx) = Context::channel();
    let clock = ManualClock::new();
    let mut m = QuizMachine::new(GameConfig::default().with_seed(11), pool(3));

    seat(&mut m, &clock, &ctx, &["Ann", "Ben"]);
    let players = m.session().players();
    assert_eq!(players[0].assigned().len(), 3);
    assert!(players[1].assigned().is_empty());
    assert!(m.bank().all_unused().is_empty());

    for _ in 0..3 {
        assert_eq!(m.session().active_index(), 0);
        answer(&mut m, &clock, &ctx, '1');
    }

    assert_eq!(m.phase(), &Phase::Results);
    let players = m.session().players();
    assert_eq!(players[0].score(), 30);
    assert_eq!(players[0].correct_count(), 3);
    assert_eq!(players[1].score(), 0);

    let winners: Vec<&str> = ScoreKeeper::winners(players).iter().map(|p| p.name.as_str()).collect();
    assert_eq!(winners, ["Ann"]);
}

#[test]
fn test_full_game_block_turns() {
    let (ctx, mut rx) = Context::channel();
    let clock = ManualClock::new();
    let config = GameConfig::default().with_seed(3).with_questions_per_player(2);
    let mut m = QuizMachine::new(config, pool(10));

    seat(&mut m, &clock, &ctx, &["Ann", "Ben", "Cy"]);
    assert_eq!(drain(&mut rx), vec![Command::LoopSound(Sound::Timer)]);

    // Ann: both right. Ben: one right one wrong. Cy: lets both time out.
    let mut turns = Vec::new();
    for key in ['1', '1', '1', '2'] {
        turns.push(m.session().active_index());
        answer(&mut m, &clock, &ctx, key);
    }
    for _ in 0..2 {
        turns.push(m.session().active_index());
        let limit = m.config().question_time_limit;
        m.on_tick(clock.advance(limit), &ctx);
        assert!(matches!(m.phase(), Phase::Feedback { .. }));
        let delay = m.config().feedback_delay;
        m.on_tick(clock.advance(delay), &ctx);
    }

    assert_eq!(turns, vec![0, 0, 1, 1, 2, 2]);
    assert_eq!(m.phase(), &Phase::Results);

    let scores: Vec<u32> = m.session().players().iter().map(|p| p.score()).collect();
    assert_eq!(scores, vec![20, 10, 0]);

    let sounds = drain(&mut rx);
    let wrong = sounds.iter().filter(|c| **c == Command::PlaySound(Sound::Wrong)).count();
    let correct = sounds.iter().filter(|c| **c == Command::PlaySound(Sound::Correct)).count();
    assert_eq!((correct, wrong), (3, 3));
}

#[test]
fn test_results_dismiss_resets_everything() {
    let (ctx, _rx) = Context::channel();
    let clock = ManualClock::new();
    let config = GameConfig::default().with_seed(9).with_questions_per_player(1);
    let mut m = QuizMachine::new(config, pool(4));

    seat(&mut m, &clock, &ctx, &["Ann", "Ben"]);
    answer(&mut m, &clock, &ctx, '1');
    answer(&mut m, &clock, &ctx, '3');
    assert_eq!(m.phase(), &Phase::Results);
    assert_eq!(m.bank().all_unused().len(), 2);

    press(&mut m, &clock, &ctx, Key::Char('x'));
    assert_eq!(m.phase(), &Phase::Menu);
    assert!(m.session().players().is_empty());
    assert_eq!(m.bank().all_unused().len(), 4);

    // A second game draws from the full pool again
    seat(&mut m, &clock, &ctx, &["Cy", "Di"]);
    assert!(matches!(m.phase(), Phase::Question { .. }));
    let sizes: Vec<usize> = m.session().players().iter().map(|p| p.assigned().len()).collect();
    assert_eq!(sizes, vec![1, 1]);
    assert_eq!(m.bank().all_unused().len(), 2);
}

#[test]
fn test_small_pool_is_reassigned_after_reset() {
    let (ctx, _rx) = Context::channel();
    let clock = ManualClock::new();
    let mut m = QuizMachine::new(GameConfig::default().with_seed(4), pool(3));

    seat(&mut m, &clock, &ctx, &["Ann", "Ben"]);
    for _ in 0..3 {
        answer(&mut m, &clock, &ctx, '1');
    }
    assert_eq!(m.phase(), &Phase::Results);
    press(&mut m, &clock, &ctx, Key::Enter);

    seat(&mut m, &clock, &ctx, &["Cy", "Di"]);
    let sizes: Vec<usize> = m.session().players().iter().map(|p| p.assigned().len()).collect();
    assert_eq!(sizes, vec![3, 0]);
    assert!(m.bank().all_unused().is_empty());
}

#[test]
fn test_timer_counts_down_and_expires_once() {
    let (ctx, mut rx) = Context::channel();
    let clock = ManualClock::new();
    let config = GameConfig::default().with_seed(1).with_questions_per_player(2);
    let mut m = QuizMachine::new(config, pool(4));
    seat(&mut m, &clock, &ctx, &["Ann", "Ben"]);
    drain(&mut rx);

    assert_eq!(m.time_remaining(clock.now()), Duration::from_secs(30));
    m.on_tick(clock.advance(Duration::from_secs(12)), &ctx);
    assert_eq!(m.time_remaining(clock.now()), Duration::from_secs(18));
    assert!(drain(&mut rx).is_empty());

    m.on_tick(clock.advance(Duration::from_secs(20)), &ctx);
    assert_eq!(
        drain(&mut rx),
        vec![Command::StopSound(Sound::Timer), Command::PlaySound(Sound::Wrong)]
    );

    // Further ticks inside the feedback window do not re-fire
    m.on_tick(clock.advance(Duration::from_millis(500)), &ctx);
    assert!(drain(&mut rx).is_empty());
    assert_eq!(m.session().players()[0].score(), 0);
}

#[test]
fn test_escape_backs_out_of_setup() {
    let (ctx, _rx) = Context::channel();
    let clock = ManualClock::new();
    let mut m = QuizMachine::new(GameConfig::default(), pool(4));

    press(&mut m, &clock, &ctx, Key::Char('1'));
    press(&mut m, &clock, &ctx, Key::Char('2'));
    type_name(&mut m, &clock, &ctx, "Ann");
    assert_eq!(m.session().players().len(), 1);

    press(&mut m, &clock, &ctx, Key::Escape);
    assert_eq!(m.phase(), &Phase::PlayerCountSelect);
    assert!(m.session().players().is_empty());

    press(&mut m, &clock, &ctx, Key::Escape);
    assert_eq!(m.phase(), &Phase::Menu);

    press(&mut m, &clock, &ctx, Key::Char('3'));
    assert!(m.is_finished());
}
