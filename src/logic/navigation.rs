//! Result list selection logic
//!
//! Pure functions for moving the selection through the word list.
//! Single steps wrap around; page and jump moves clamp to the ends.

/// Calculate the next selection index with wrapping
///
/// # Examples
/// ```
/// use wordzenith::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i >= list_len - 1 => 0, // Wrap to start
        Some(i) => i + 1,
        None => 0,
    })
}

/// Calculate the previous selection index with wrapping
///
/// # Examples
/// ```
/// use wordzenith::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(1), 3), Some(0));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1, // Wrap to end
        Some(i) => (i - 1).min(list_len - 1),
    })
}

/// Move down by `page` rows, stopping at the last row
pub fn page_down(current: Option<usize>, list_len: usize, page: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).saturating_add(page.max(1)).min(list_len - 1))
}

/// Move up by `page` rows, stopping at the first row
pub fn page_up(current: Option<usize>, list_len: usize, page: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1).saturating_sub(page.max(1)))
}

pub fn first_selection(list_len: usize) -> Option<usize> {
    (list_len > 0).then_some(0)
}

pub fn last_selection(list_len: usize) -> Option<usize> {
    list_len.checked_sub(1)
}
