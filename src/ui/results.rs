use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::api::WordEntry;
use crate::logic::view::{format_row, spinner_frame, ResultView};

/// Render whichever of {loading, error, words} the view selects.
///
/// Returns the number of list rows that fit, for page navigation.
pub fn render_results(
    f: &mut Frame,
    area: Rect,
    view: ResultView<'_>,
    selected: Option<usize>,
    spinner_tick: usize,
) -> usize {
    match view {
        ResultView::Loading => {
            render_loading(f, area, spinner_tick);
            0
        }
        ResultView::Error(message) => {
            render_error(f, area, message);
            0
        }
        ResultView::Words(words) => render_word_list(f, area, words, selected),
    }
}

fn render_loading(f: &mut Frame, area: Rect, spinner_tick: usize) {
    let line = Line::from(vec![
        Span::styled(
            spinner_frame(spinner_tick),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" Loading..."),
    ]);

    let paragraph = Paragraph::new(vec![Line::from(""), line]).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_error(f: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::Red))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_word_list(
    f: &mut Frame,
    area: Rect,
    words: &[WordEntry],
    selected: Option<usize>,
) -> usize {
    let title = if words.is_empty() {
        " Words ".to_string()
    } else {
        format!(" Words ({}) ", words.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .border_style(Style::default().fg(Color::Green));

    let inner_height = block.inner(area).height as usize;

    let items: Vec<ListItem> = words
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            ListItem::new(Span::styled(
                format_row(i, entry),
                Style::default().add_modifier(Modifier::BOLD),
            ))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(selected.filter(|&i| i < words.len()));
    f.render_stateful_widget(list, area, &mut state);

    inner_height
}
