pub mod chart;
pub mod home;
pub mod practice;
pub mod screen;

use kanapro::config::Direction;
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

pub fn draw(app: &App, f: &mut Frame) {
    screen::current_screen(&app.state).render(app, f);
}

/// Accent colour of a practice mode: indigo for romaji → kana, sakura for kana → romaji
pub fn accent(direction: Direction) -> Color {
    match direction {
        Direction::TransliterationToSymbol => Color::Rgb(0x6a, 0x9b, 0xd8),
        Direction::SymbolToTransliteration => Color::Rgb(0xe8, 0x98, 0xc0),
    }
}

pub fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn dim() -> Style {
    Style::default().add_modifier(Modifier::DIM)
}

/// A `width` x `height` rect in the middle of `area`, shrunk to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Pad to a fixed display width; kana occupy two columns each
pub fn pad_display(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{text}{}", " ".repeat(pad))
}
