/// Draws a [`Scene`] with ratatui. The only place that knows about widgets.
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::core::scene::{DrawCommand, Scene, Tone};

impl From<Tone> for Color {
    fn from(tone: Tone) -> Self {
        match tone {
            Tone::Title | Tone::Winner => Color::Yellow,
            Tone::Text => Color::White,
            Tone::Muted => Color::Gray,
            Tone::Good => Color::Green,
            Tone::Bad | Tone::Danger => Color::Red,
            Tone::Accent => Color::Blue,
        }
    }
}

fn background(tone: Tone) -> Color {
    match tone {
        Tone::Accent => Color::Rgb(0, 0, 50),
        _ => Color::Black,
    }
}

pub fn draw<A: Clone>(frame: &mut Frame, scene: &Scene<A>) {
    let bounds = frame.area();

    for cmd in scene.commands() {
        match cmd {
            DrawCommand::Background(tone) => {
                frame.render_widget(Clear, bounds);
                frame.render_widget(Block::default().style(Style::default().bg(background(*tone))), bounds);
            }
            DrawCommand::Text { area, text, tone, centered } => {
                let mut style = Style::default().fg((*tone).into());
                if matches!(tone, Tone::Title | Tone::Winner) {
                    style = style.add_modifier(Modifier::BOLD);
                }
                let alignment = if *centered { Alignment::Center } else { Alignment::Left };
                frame.render_widget(
                    Paragraph::new(text.as_str())
                        .style(style)
                        .alignment(alignment)
                        .wrap(Wrap { trim: true }),
                    area.intersection(bounds),
                );
            }
            DrawCommand::Panel { area, title, tone } => {
                let mut block = Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg((*tone).into()));
                if let Some(title) = title {
                    block = block.title(format!(" {title} "));
                }
                frame.render_widget(block, area.intersection(bounds));
            }
            DrawCommand::Button { area, label, tone, .. } => {
                let block = Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::White))
                    .style(Style::default().bg((*tone).into()));
                frame.render_widget(
                    Paragraph::new(label.as_str())
                        .block(block)
                        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
                        .alignment(Alignment::Center),
                    area.intersection(bounds),
                );
            }
            DrawCommand::Bar { area, ratio, tone, label } => {
                frame.render_widget(
                    Gauge::default()
                        .gauge_style(Style::default().fg((*tone).into()).bg(Color::Black))
                        .ratio(*ratio)
                        .label(label.as_str()),
                    area.intersection(bounds),
                );
            }
            DrawCommand::Cursor { x, y } => {
                if bounds.contains((*x, *y).into()) {
                    frame.set_cursor_position((*x, *y));
                }
            }
        }
    }
}

/// Shrink `area` to `width` x `height` around its centre
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn rendered(scene: &Scene<u8>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, scene)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_draws_text_and_buttons() {
        let mut scene = Scene::new(Tone::Accent);
        scene.centered_text(Rect::new(0, 0, 40, 1), "HELLO", Tone::Title);
        scene.button(Rect::new(5, 2, 20, 3), "Press", Tone::Accent, 1);
        scene.bar(Rect::new(0, 6, 40, 1), 0.5, Tone::Good, "15s");

        let screen = rendered(&scene, 40, 8);
        assert!(screen.contains("HELLO"));
        assert!(screen.contains("Press"));
        assert!(screen.contains("15s"));
    }

    #[test]
    fn test_out_of_bounds_commands_are_clipped() {
        let mut scene = Scene::new(Tone::Text);
        scene.text(Rect::new(70, 30, 20, 2), "far away", Tone::Text);
        scene.cursor(200, 200);

        let screen = rendered(&scene, 20, 5);
        assert!(!screen.contains("far away"));
    }

    #[test]
    fn test_centered() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered(area, 20, 4), Rect::new(30, 10, 20, 4));
        assert_eq!(centered(Rect::new(0, 0, 10, 2), 20, 4), Rect::new(0, 0, 10, 2));
    }
}
