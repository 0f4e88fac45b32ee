//! Keyboard Input Handler
//!
//! The alert is modal: while it is open only the dismiss keys do anything.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::logic::input::{capture_char, clear_field};
use crate::logic::navigation;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    // Alert swallows everything until dismissed
    if app.model.ui.has_modal() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.model.ui.dismiss_alert();
        }
        return;
    }

    let list_len = app.model.search.words.len();
    let page = app.model.ui.list_page_size;
    let selected = app.model.ui.selected_index;

    match key.code {
        KeyCode::Esc => {
            app.model.ui.should_quit = true;
        }
        KeyCode::Enter => {
            app.trigger_search();
        }
        KeyCode::Backspace | KeyCode::Delete => {
            clear_field(&mut app.model.search.letter);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            capture_char(&mut app.model.search.letter, c);
        }
        KeyCode::Down => {
            app.model.ui.selected_index = navigation::next_selection(selected, list_len);
        }
        KeyCode::Up => {
            app.model.ui.selected_index = navigation::prev_selection(selected, list_len);
        }
        KeyCode::PageDown => {
            app.model.ui.selected_index = navigation::page_down(selected, list_len, page);
        }
        KeyCode::PageUp => {
            app.model.ui.selected_index = navigation::page_up(selected, list_len, page);
        }
        KeyCode::Home => {
            app.model.ui.selected_index = navigation::first_selection(list_len);
        }
        KeyCode::End => {
            app.model.ui.selected_index = navigation::last_selection(list_len);
        }
        _ => {}
    }
}
