//! Scene for each phase. Pure functions of the machine state; the same scene
//! is drawn and used for pointer hit-testing.

use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::{LOW_TIME_WARNING, MAX_PLAYERS, MIN_PLAYERS, POINTS_PER_CORRECT};
use crate::core::renderer::centered;
use crate::core::scene::{Scene, Tone};
use crate::games::quiz::intent::Intent;
use crate::games::quiz::machine::QuizMachine;
use crate::games::quiz::question::QuestionId;
use crate::games::quiz::score::{AnswerOutcome, ScoreKeeper};
use crate::games::quiz::session::Phase;
use crate::games::quiz::timer::display_secs;

const BUTTON_WIDTH: u16 = 30;
const BUTTON_HEIGHT: u16 = 3;
const BUTTON_GAP: u16 = 1;

pub fn build(machine: &QuizMachine, now: Instant) -> Scene<Intent> {
    let area = machine.viewport();
    match machine.phase() {
        Phase::Menu => menu(area),
        Phase::Help => help(machine, area),
        Phase::PlayerCountSelect => player_count(area),
        Phase::NameEntry { expected, input } => name_entry(machine, area, *expected, input),
        Phase::Question { question: id } => question(machine, area, *id, now),
        Phase::Feedback { outcome, .. } => feedback(machine, area, outcome),
        Phase::Results => results(machine, area),
    }
}

/// One text row `offset` lines below the top of `area`
fn row(area: Rect, offset: u16) -> Rect {
    Rect::new(area.x, area.y.saturating_add(offset), area.width, 1)
}

fn footer(area: Rect) -> Rect {
    row(area, area.height.saturating_sub(2))
}

/// Vertically stacked, horizontally centred button slots
fn button_stack(area: Rect, top: u16, count: usize, width: u16) -> Vec<Rect> {
    let width = width.min(area.width);
    let x = area.x + (area.width - width) / 2;
    (0..count as u16)
        .map(|i| {
            let y = area.y.saturating_add(top + i * (BUTTON_HEIGHT + BUTTON_GAP));
            Rect::new(x, y, width, BUTTON_HEIGHT)
        })
        .collect()
}

fn menu(area: Rect) -> Scene<Intent> {
    let mut scene = Scene::new(Tone::Accent);
    scene.centered_text(row(area, 2), "QUIZTERM", Tone::Title);
    scene.centered_text(row(area, 3), "Local multiplayer trivia", Tone::Muted);

    let slots = button_stack(area, 6, 3, BUTTON_WIDTH);
    scene.button(slots[0], "1. Start", Tone::Accent, Intent::Start);
    scene.button(slots[1], "2. Help", Tone::Accent, Intent::Help);
    scene.button(slots[2], "3. Quit", Tone::Danger, Intent::Quit);

    scene.centered_text(footer(area), "Press 1-3 or click a button", Tone::Muted);
    scene
}

fn help(machine: &QuizMachine, area: Rect) -> Scene<Intent> {
    let mut scene = Scene::new(Tone::Accent);
    scene.centered_text(row(area, 1), "HELP", Tone::Title);

    let lines = [
        "How to play:".to_string(),
        format!("- {MIN_PLAYERS} to {MAX_PLAYERS} players take turns"),
        format!(
            "- Each player answers up to {} questions",
            machine.config().questions_per_player
        ),
        format!("- Correct answer: +{POINTS_PER_CORRECT} points"),
        format!(
            "- Press 1-4 to answer within {} seconds",
            machine.config().question_time_limit.as_secs()
        ),
        "- Esc: back to the menu".to_string(),
    ];
    let body = Rect::new(area.x + 4, area.y, area.width.saturating_sub(8), area.height);
    for (i, line) in lines.into_iter().enumerate() {
        scene.text(row(body, 4 + i as u16 * 2), line, Tone::Text);
    }

    scene.centered_text(footer(area), "Press any key to return", Tone::Muted);
    scene
}

fn player_count(area: Rect) -> Scene<Intent> {
    let mut scene = Scene::new(Tone::Accent);
    scene.centered_text(row(area, 2), "Number of players", Tone::Title);

    let counts: Vec<usize> = (MIN_PLAYERS..=MAX_PLAYERS).collect();
    let slots = button_stack(area, 5, counts.len() + 1, BUTTON_WIDTH);
    for (slot, n) in slots.iter().zip(&counts) {
        scene.button(*slot, format!("{n} Players"), Tone::Accent, Intent::ChooseCount(*n));
    }
    scene.button(slots[counts.len()], "Back", Tone::Danger, Intent::Cancel);

    scene.centered_text(footer(area), "Press 2-4 to choose, Esc to go back", Tone::Muted);
    scene
}

fn name_entry(machine: &QuizMachine, area: Rect, expected: usize, input: &str) -> Scene<Intent> {
    let mut scene = Scene::new(Tone::Accent);
    let seat = machine.session().players().len() + 1;
    scene.centered_text(row(area, 2), format!("Player {seat} of {expected}"), Tone::Title);
    scene.centered_text(row(area, 5), format!("Player {seat} - enter your name:"), Tone::Text);

    let width = machine.config().max_name_length as u16 + 6;
    let boxed = Rect::new(centered(area, width, 3).x, area.y.saturating_add(7), width.min(area.width), 3);
    scene.panel(boxed, None, Tone::Text);
    let inner = Rect::new(boxed.x + 2, boxed.y + 1, boxed.width.saturating_sub(4), 1);
    scene.text(inner, input, Tone::Text);
    scene.cursor(inner.x + input.chars().count() as u16, inner.y);

    let joined: Vec<&str> = machine.session().players().iter().map(|p| p.name.as_str()).collect();
    if !joined.is_empty() {
        scene.centered_text(row(area, 12), format!("Joined: {}", joined.join(", ")), Tone::Muted);
    }

    scene.centered_text(footer(area), "Enter: confirm   Backspace: erase   Esc: back", Tone::Muted);
    scene
}

fn question(machine: &QuizMachine, area: Rect, id: QuestionId, now: Instant) -> Scene<Intent> {
    let mut scene = Scene::new(Tone::Text);
    let session = machine.session();
    let (Some(player), Some(q)) = (session.active_player(), machine.bank().get(id)) else {
        return scene;
    };

    let inset = Rect::new(area.x + 2, area.y, area.width.saturating_sub(4), area.height);
    scene.text(row(inset, 1), format!("{} - Score: {}", player.name, player.score()), Tone::Text);
    scene.text(
        row(inset, 2),
        format!("{} | Question {}/{}", q.category(), player.progress() + 1, player.assigned().len()),
        Tone::Muted,
    );

    let limit = machine.config().question_time_limit;
    let remaining = machine.time_remaining(now);
    let tone = if remaining > LOW_TIME_WARNING { Tone::Good } else { Tone::Bad };
    let ratio = if limit.is_zero() { 0.0 } else { remaining.as_secs_f64() / limit.as_secs_f64() };
    scene.bar(row(inset, 3), ratio, tone, format!("{}s", display_secs(remaining)));

    let text_area = Rect::new(inset.x, inset.y.saturating_add(6), inset.width, 3);
    scene.centered_text(text_area, q.text(), Tone::Title);

    let slots = button_stack(area, 10, q.options().len(), area.width.saturating_sub(8).min(60));
    for (i, (slot, option)) in slots.iter().zip(q.options()).enumerate() {
        scene.button(*slot, format!("{}. {}", i + 1, option), Tone::Accent, Intent::Answer(i));
    }

    scene.centered_text(footer(area), "1-4: answer   Esc: abandon game", Tone::Muted);
    scene
}

pub fn feedback_message(outcome: &AnswerOutcome) -> String {
    if outcome.correct {
        format!("Correct! +{} points", outcome.points_awarded)
    } else if outcome.timed_out() {
        format!("Time's up! The correct answer was: {}", outcome.correct_option_text)
    } else {
        format!("Wrong! The correct answer was: {}", outcome.correct_option_text)
    }
}

fn feedback(machine: &QuizMachine, area: Rect, outcome: &AnswerOutcome) -> Scene<Intent> {
    let mut scene = Scene::new(Tone::Text);
    let tone = if outcome.correct { Tone::Good } else { Tone::Bad };
    let middle = area.height / 2;
    scene.centered_text(row(area, middle.saturating_sub(1)), feedback_message(outcome), tone);

    if let Some(player) = machine.session().active_player() {
        scene.centered_text(
            row(area, middle + 1),
            format!("{}: {} pts", player.name, player.score()),
            Tone::Muted,
        );
    }
    scene
}

fn results(machine: &QuizMachine, area: Rect) -> Scene<Intent> {
    let mut scene = Scene::new(Tone::Accent);
    scene.centered_text(row(area, 1), "Final Results", Tone::Title);

    let players = machine.session().players();
    let top = ScoreKeeper::max_score(players).max(1);
    let winners = ScoreKeeper::winners(players);
    let inset = Rect::new(area.x + 4, area.y, area.width.saturating_sub(8), area.height);

    for (rank, player) in ScoreKeeper::standings(players).into_iter().enumerate() {
        let y = 4 + rank as u16 * 3;
        let is_winner = winners.iter().any(|w| std::ptr::eq(*w, player));
        let line = format!(
            "{}. {}: {} pts ({}/{} correct)",
            rank + 1,
            player.name,
            player.score(),
            player.correct_count(),
            player.progress()
        );
        scene.text(row(inset, y), line, if is_winner { Tone::Winner } else { Tone::Text });
        scene.bar(
            row(inset, y + 1),
            f64::from(player.score()) / f64::from(top),
            Tone::Accent,
            "",
        );
    }

    scene.centered_text(footer(area), "Press any key to return to the menu", Tone::Muted);
    scene
}
