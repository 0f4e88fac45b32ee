//! Render policy for the results region
//!
//! Loading wins over error, error wins over the list. Exactly one variant is
//! ever produced, so the three displays can never overlap.

use crate::api::WordEntry;
use crate::model::SearchModel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultView<'a> {
    Loading,
    Error(&'a str),
    Words(&'a [WordEntry]),
}

pub fn result_view(search: &SearchModel) -> ResultView<'_> {
    if search.is_loading {
        ResultView::Loading
    } else if !search.error.is_empty() {
        ResultView::Error(&search.error)
    } else {
        ResultView::Words(&search.words)
    }
}

/// Row text for the word at `index` (0-based), shown with a 1-based ordinal
///
/// # Examples
/// ```
/// use wordzenith::api::WordEntry;
/// use wordzenith::logic::view::format_row;
///
/// assert_eq!(format_row(0, &WordEntry::new("bat")), "1. bat");
/// ```
pub fn format_row(index: usize, entry: &WordEntry) -> String {
    format!("{}. {}", index + 1, entry.word)
}

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Indeterminate progress glyph for the given frame counter
pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}
