//! Pure Application Model
//!
//! - **SearchModel**: letter, loading flag, error, words, request sequencing
//! - **UiModel**: alert, list selection, spinner
//!
//! No services live here; all I/O is in the lookup service and handlers.

pub mod search;
pub mod ui;

pub use search::SearchModel;
pub use ui::{Alert, UiModel};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub search: SearchModel,
    pub ui: UiModel,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if any modal dialog is showing
    pub fn has_modal(&self) -> bool {
        self.ui.has_modal()
    }
}
