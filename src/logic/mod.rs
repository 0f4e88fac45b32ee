//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal or network:
//! - errors: Lookup failure classification and user-facing messages
//! - input: One-character input field behaviour
//! - navigation: Result list selection
//! - validation: Single-letter check for the search trigger
//! - view: Render policy for the results region

pub mod errors;
pub mod input;
pub mod navigation;
pub mod validation;
pub mod view;
