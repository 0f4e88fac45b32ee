use crate::App;
use ratatui::Frame;

use super::{dialogs, screen};

/// Root render function (the shell)
///
/// Holds no state of its own: gives the whole terminal to the search screen
/// and draws the alert on top when one is open.
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();

    screen::render_search_screen(f, size, app);

    if let Some(alert) = &app.model.ui.alert {
        dialogs::render_alert(f, size, alert);
    }
}
