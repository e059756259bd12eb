//! Draw commands a game emits each frame. The renderer turns them into widgets.
use ratatui::layout::{Position, Rect};

/// Semantic colour of a drawn element; the renderer picks the actual palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Text,
    Muted,
    Good,
    Bad,
    Accent,
    Danger,
    Winner,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand<A> {
    /// Fill the whole frame
    Background(Tone),
    Text {
        area: Rect,
        text: String,
        tone: Tone,
        centered: bool,
    },
    /// Bordered rectangle with an optional title
    Panel {
        area: Rect,
        title: Option<String>,
        tone: Tone,
    },
    Button {
        area: Rect,
        label: String,
        tone: Tone,
        action: A,
    },
    /// Horizontal progress bar, `ratio` in `0.0..=1.0`
    Bar {
        area: Rect,
        ratio: f64,
        tone: Tone,
        label: String,
    },
    Cursor { x: u16, y: u16 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene<A> {
    commands: Vec<DrawCommand<A>>,
}

impl<A: Clone> Scene<A> {
    pub fn new(background: Tone) -> Self {
        Self {
            commands: vec![DrawCommand::Background(background)],
        }
    }

    pub fn commands(&self) -> &[DrawCommand<A>] {
        &self.commands
    }

    pub fn push(&mut self, cmd: DrawCommand<A>) {
        self.commands.push(cmd);
    }

    pub fn text(&mut self, area: Rect, text: impl Into<String>, tone: Tone) {
        self.push(DrawCommand::Text { area, text: text.into(), tone, centered: false });
    }

    pub fn centered_text(&mut self, area: Rect, text: impl Into<String>, tone: Tone) {
        self.push(DrawCommand::Text { area, text: text.into(), tone, centered: true });
    }

    pub fn panel(&mut self, area: Rect, title: Option<&str>, tone: Tone) {
        self.push(DrawCommand::Panel { area, title: title.map(str::to_string), tone });
    }

    pub fn button(&mut self, area: Rect, label: impl Into<String>, tone: Tone, action: A) {
        self.push(DrawCommand::Button { area, label: label.into(), tone, action });
    }

    pub fn bar(&mut self, area: Rect, ratio: f64, tone: Tone, label: impl Into<String>) {
        self.push(DrawCommand::Bar {
            area,
            ratio: ratio.clamp(0.0, 1.0),
            tone,
            label: label.into(),
        });
    }

    pub fn cursor(&mut self, x: u16, y: u16) {
        self.push(DrawCommand::Cursor { x, y });
    }

    /// Action of the topmost button covering the cell, if any
    pub fn hit(&self, column: u16, row: u16) -> Option<A> {
        let pos = Position::new(column, row);
        self.commands.iter().rev().find_map(|cmd| match cmd {
            DrawCommand::Button { area, action, .. } if area.contains(pos) => Some(action.clone()),
            _ => None,
        })
    }

    /// Every text fragment in draw order, handy for assertions
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                DrawCommand::Button { label, .. } => Some(label.as_str()),
                DrawCommand::Bar { label, .. } => Some(label.as_str()),
                DrawCommand::Panel { title: Some(title), .. } => Some(title.as_str()),
                _ => None,
            })
            .collect()
    }
}
