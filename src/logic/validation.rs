//! Input validation for the search trigger

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

pub const INVALID_INPUT_TITLE: &str = "Invalid Input";
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a single letter.";

static SINGLE_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]$").expect("single-letter pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a single letter.")]
    NotSingleLetter { input: String },
}

/// Check that `input` is exactly one ASCII letter and return it
///
/// # Examples
/// ```
/// use wordzenith::logic::validation::validate_letter;
///
/// assert_eq!(validate_letter("b"), Ok('b'));
/// assert_eq!(validate_letter("B"), Ok('B'));
/// assert!(validate_letter("").is_err());
/// assert!(validate_letter("7").is_err());
/// assert!(validate_letter("ab").is_err());
/// ```
pub fn validate_letter(input: &str) -> Result<char, ValidationError> {
    let invalid = || ValidationError::NotSingleLetter {
        input: input.to_string(),
    };

    if !SINGLE_LETTER.is_match(input) {
        return Err(invalid());
    }
    input.chars().next().ok_or_else(invalid)
}
