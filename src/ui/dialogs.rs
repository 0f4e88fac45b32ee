use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::layout::centered_rect;
use crate::model::Alert;

/// Render a blocking alert centered over `area`
pub fn render_alert(f: &mut Frame, area: Rect, alert: &Alert) {
    let content_width = alert.message.width().max(alert.title.width()).max(20);
    let prompt_width = (content_width + 6) as u16;
    let prompt_height = 7;
    let prompt_area = centered_rect(area, prompt_width, prompt_height);

    let text = vec![
        Line::from(""),
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let prompt = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(alert.title.as_str())
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}
