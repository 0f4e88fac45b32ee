use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub const TITLE: &str = "WordZenith📚";
pub const TAGLINE: &str = "...enter a letter, find your words.";

pub fn render_banner(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            TAGLINE,
            Style::default().add_modifier(Modifier::ITALIC | Modifier::BOLD),
        )),
    ];

    let banner = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(banner, area);
}
