//! Letter Input UI
//!
//! Renders the one-character input box with placeholder and blinking cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub const PLACEHOLDER: &str = "Enter a letter e.g. A, b , z...";

/// Render the letter input box
///
/// # Arguments
/// - `letter`: Current field contents (empty or one character)
/// - `active`: False while a modal is open
pub fn render_letter_input(f: &mut Frame, area: Rect, letter: &str, active: bool) {
    let border_color = if active { Color::Green } else { Color::DarkGray };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Letter ")
        .title_bottom(Line::from(" Enter: 🔍 search ").right_aligned())
        .border_style(Style::default().fg(border_color));

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);

    let input_line = if letter.is_empty() {
        Line::from(vec![
            Span::styled("█", cursor_style),
            Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(letter, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled("█", cursor_style),
        ])
    };

    f.render_widget(Paragraph::new(input_line).block(block), area);
}
