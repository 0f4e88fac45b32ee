//! Rendering through ratatui's TestBackend
//!
//! Checks what actually lands in the terminal buffer for each search state.

use ratatui::{backend::TestBackend, Terminal};
use tokio::sync::mpsc;

use wordzenith::api::WordEntry;
use wordzenith::logic::errors::CONNECTIVITY_MESSAGE;
use wordzenith::ui;
use wordzenith::App;

fn app() -> App {
    let (request_tx, _request_rx) = mpsc::unbounded_channel();
    let (_response_tx, response_rx) = mpsc::unbounded_channel();
    App::new(request_tx, response_rx)
}

fn draw(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn words(list: &[&str]) -> Vec<WordEntry> {
    list.iter().map(|w| WordEntry::new(*w)).collect()
}

#[test]
fn test_initial_screen() {
    let mut app = app();
    let screen = draw(&mut app);

    assert!(screen.contains("...enter a letter, find your words."));
    assert!(screen.contains("Enter a letter e.g. A, b , z..."));
    assert!(!screen.contains("Loading"));
}

#[test]
fn test_word_rows_in_order() {
    let mut app = app();
    app.model.search.words = words(&["bat", "bee"]);
    let screen = draw(&mut app);

    let bat = screen.find("1. bat").expect("row 1 rendered");
    let bee = screen.find("2. bee").expect("row 2 rendered");
    assert!(bat < bee);
    assert!(screen.contains("Words (2)"));
}

#[test]
fn test_loading_shows_only_indicator() {
    let mut app = app();
    app.model.search.words = words(&["bat"]);
    app.model.search.is_loading = true;
    let screen = draw(&mut app);

    assert!(screen.contains("Loading"));
    assert!(!screen.contains("1. bat"));
    assert!(!screen.contains("Error:"));
}

#[test]
fn test_error_shows_only_error_text() {
    let mut app = app();
    app.model.search.words = words(&["bat"]);
    app.model.search.error = "Error: 500 - Internal Error".to_string();
    let screen = draw(&mut app);

    assert!(screen.contains("Error: 500 - Internal Error"));
    assert!(!screen.contains("1. bat"));
    assert!(!screen.contains("Loading"));
}

#[test]
fn test_connectivity_message_wraps_but_renders() {
    let mut app = app();
    app.model.search.error = CONNECTIVITY_MESSAGE.to_string();
    let screen = draw(&mut app);

    assert!(screen.contains("Oops! Couldn't connect to the server."));
}

#[test]
fn test_alert_overlay() {
    let mut app = app();
    app.model.search.letter = "7".to_string();
    app.trigger_search();
    let screen = draw(&mut app);

    assert!(screen.contains("Invalid Input"));
    assert!(screen.contains("Please enter a single letter."));
}

#[test]
fn test_duplicate_words_render_as_separate_rows() {
    let mut app = app();
    app.model.search.words = words(&["dog", "dog"]);
    let screen = draw(&mut app);

    assert!(screen.contains("1. dog"));
    assert!(screen.contains("2. dog"));
}

#[test]
fn test_render_records_page_size() {
    let mut app = app();
    app.model.search.words = words(&["a1", "a2"]);
    draw(&mut app);

    assert!(app.model.ui.list_page_size > 0);
}
