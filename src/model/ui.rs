//! UI Model
//!
//! State that only affects presentation: the modal alert, the list selection
//! and the spinner frame.

/// A blocking, dismissible notification
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiModel {
    /// Modal alert (swallows input until dismissed)
    pub alert: Option<Alert>,

    /// Selected row in the word list
    pub selected_index: Option<usize>,

    /// Rows visible in the list on the last frame (for page moves)
    pub list_page_size: usize,

    /// Spinner frame counter, advanced once per loop iteration
    pub spinner_tick: usize,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_modal(&self) -> bool {
        self.alert.is_some()
    }

    pub fn show_alert(&mut self, title: &str, message: &str) {
        self.alert = Some(Alert {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}
