/// Terminal events reduced to the handful of inputs a game cares about
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Backspace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Key(Key),
    PointerDown { column: u16, row: u16 },
    Resize { width: u16, height: u16 },
}

impl Input {
    /// Translate a raw crossterm event. Returns `None` for events no game reacts to.
    pub fn from_event(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_) => Some(Input::PointerDown {
                    column: mouse.column,
                    row: mouse.row,
                }),
                _ => None,
            },
            Event::Resize(width, height) => Some(Input::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    fn from_key(key: &KeyEvent) -> Option<Self> {
        // Release and repeat events show up on some platforms; only presses count.
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Input::Quit),
                _ => None,
            };
        }

        let key = match key.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Backspace => Key::Backspace,
            _ => return None,
        };
        Some(Input::Key(key))
    }

    /// Digit keys `1`..=`9` as a number, used by every numbered menu
    pub fn digit(&self) -> Option<usize> {
        match self {
            Input::Key(Key::Char(c)) => c.to_digit(10).map(|d| d as usize),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, MouseButton, MouseEvent};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_keys_translate() {
        assert_eq!(Input::from_event(&key(KeyCode::Char('a'))), Some(Input::Key(Key::Char('a'))));
        assert_eq!(Input::from_event(&key(KeyCode::Enter)), Some(Input::Key(Key::Enter)));
        assert_eq!(Input::from_event(&key(KeyCode::Esc)), Some(Input::Key(Key::Escape)));
        assert_eq!(Input::from_event(&key(KeyCode::Backspace)), Some(Input::Key(Key::Backspace)));
        assert_eq!(Input::from_event(&key(KeyCode::Tab)), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(Input::from_event(&event), Some(Input::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let event = Event::Key(KeyEvent {
            code: KeyCode::Char('1'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(Input::from_event(&event), None);
    }

    #[test]
    fn test_mouse_down_and_resize() {
        let down = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(Input::from_event(&down), Some(Input::PointerDown { column: 12, row: 7 }));

        let moved = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(Input::from_event(&moved), None);

        assert_eq!(
            Input::from_event(&Event::Resize(100, 40)),
            Some(Input::Resize { width: 100, height: 40 })
        );
    }

    #[test]
    fn test_digit() {
        assert_eq!(Input::Key(Key::Char('3')).digit(), Some(3));
        assert_eq!(Input::Key(Key::Char('x')).digit(), None);
        assert_eq!(Input::Key(Key::Enter).digit(), None);
    }
}
