//! One-character input field behaviour
//!
//! The field only ever holds a single character. Extra keystrokes are
//! dropped here, before validation ever sees them.

/// Maximum characters the input field holds
pub const MAX_INPUT_LEN: usize = 1;

/// Apply a typed character to the field. Returns true if the field changed.
///
/// # Examples
/// ```
/// use wordzenith::logic::input::capture_char;
///
/// let mut letter = String::new();
/// assert!(capture_char(&mut letter, 'a'));
/// assert!(!capture_char(&mut letter, 'b'));
/// assert_eq!(letter, "a");
/// ```
pub fn capture_char(field: &mut String, c: char) -> bool {
    if c.is_control() || field.chars().count() >= MAX_INPUT_LEN {
        return false;
    }
    field.push(c);
    true
}

/// Clear the field (Backspace / Delete). Returns true if anything was removed.
pub fn clear_field(field: &mut String) -> bool {
    let changed = !field.is_empty();
    field.clear();
    changed
}
