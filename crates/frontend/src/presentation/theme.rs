//! Colors used by the scene.
use ratatui::style::{Color, Modifier, Style};

pub const HILL: Color = Color::Green;
pub const BOULDER: Color = Color::Red;
pub const SISYPHUS: Color = Color::White;
pub const BACKGROUND: Color = Color::Black;

pub fn status_bar() -> Style {
    Style::default().fg(Color::Gray).bg(BACKGROUND)
}

pub fn phase() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

pub fn finished() -> Style {
    Style::default().fg(Color::LightGreen)
}
