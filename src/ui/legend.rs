use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(has_modal: bool, has_words: bool) -> Vec<Span<'static>> {
    let key = Style::default().fg(Color::Yellow);

    if has_modal {
        return vec![Span::styled("Enter/Esc", key), Span::raw(":Dismiss  ")];
    }

    let mut hotkey_spans = vec![
        Span::styled("a-z", key),
        Span::raw(":Letter  "),
        Span::styled("Bksp", key),
        Span::raw(":Clear  "),
        Span::styled("Enter", key),
        Span::raw(":Search  "),
    ];

    if has_words {
        hotkey_spans.extend(vec![
            Span::styled("↑/↓", key),
            Span::raw(":Nav  "),
            Span::styled("PgUp/PgDn", key),
            Span::raw(":Page  "),
        ]);
    }

    hotkey_spans.extend(vec![Span::styled("Esc", key), Span::raw(":Quit")]);
    hotkey_spans
}

pub fn render_legend(f: &mut Frame, area: Rect, has_modal: bool, has_words: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(has_modal, has_words)))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(legend, area);
}
