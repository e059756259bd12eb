use crate::core::input::{Input, Key};
use crate::games::quiz::session::PhaseKind;

/// What the player meant, independent of how it was typed or clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start,
    Help,
    Quit,
    ChooseCount(usize),
    Cancel,
    Type(char),
    Erase,
    SubmitName,
    /// Zero-based option index
    Answer(usize),
    Dismiss,
}

/// Map an input to an intent for the given phase. `hit` resolves a pointer
/// position against the buttons on screen.
pub fn interpret(phase: PhaseKind, input: &Input, hit: impl FnOnce(u16, u16) -> Option<Intent>) -> Option<Intent> {
    let key = match *input {
        Input::Quit => return Some(Intent::Quit),
        Input::Resize { .. } => return None,
        Input::PointerDown { column, row } => {
            return match phase {
                PhaseKind::Help | PhaseKind::Results => Some(Intent::Dismiss),
                PhaseKind::Feedback => None,
                _ => hit(column, row),
            };
        }
        Input::Key(key) => key,
    };

    match phase {
        PhaseKind::Menu => match input.digit() {
            Some(1) => Some(Intent::Start),
            Some(2) => Some(Intent::Help),
            Some(3) => Some(Intent::Quit),
            _ => None,
        },
        PhaseKind::Help | PhaseKind::Results => Some(Intent::Dismiss),
        PhaseKind::PlayerCountSelect => match key {
            Key::Escape => Some(Intent::Cancel),
            _ => input.digit().map(Intent::ChooseCount),
        },
        PhaseKind::NameEntry => match key {
            Key::Enter => Some(Intent::SubmitName),
            Key::Escape => Some(Intent::Cancel),
            Key::Backspace => Some(Intent::Erase),
            Key::Char(c) if !c.is_control() => Some(Intent::Type(c)),
            Key::Char(_) => None,
        },
        PhaseKind::Question => match key {
            Key::Escape => Some(Intent::Cancel),
            _ => input.digit().filter(|d| *d >= 1).map(|d| Intent::Answer(d - 1)),
        },
        PhaseKind::Feedback => None,
    }
}
