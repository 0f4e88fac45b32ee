//! Search Model
//!
//! State owned by the search screen: the typed letter, the in-flight flag,
//! the last error and the last successful word list.

use crate::api::WordEntry;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchModel {
    /// Input field contents (at most one character)
    pub letter: String,

    /// True only while a request is outstanding
    pub is_loading: bool,

    /// Non-empty only after a failed request
    pub error: String,

    /// Most recent successful response, verbatim
    pub words: Vec<WordEntry>,

    /// Sequence number of the most recently issued request (0 = none)
    pub latest_request: u64,
}

impl SearchModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the loading state for a new request and return its sequence number
    pub fn begin_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.is_loading = true;
        self.error.clear();
        self.latest_request
    }

    /// Whether a response tagged `seq` is still the one we are waiting for
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.latest_request
    }

    pub fn apply_success(&mut self, words: Vec<WordEntry>) {
        self.words = words;
        self.error.clear();
        self.is_loading = false;
    }

    /// Record a failure. Previous words are kept; the error hides them.
    pub fn apply_failure(&mut self, message: String) {
        self.error = message;
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_request_clears_error_and_bumps_seq() {
        let mut search = SearchModel::new();
        search.error = "Error: 500 - boom".to_string();

        assert_eq!(search.begin_request(), 1);
        assert!(search.is_loading);
        assert!(search.error.is_empty());
        assert_eq!(search.begin_request(), 2);
        assert!(search.is_current(2));
        assert!(!search.is_current(1));
    }

    #[test]
    fn test_failure_retains_words() {
        let mut search = SearchModel::new();
        search.apply_success(vec![WordEntry::new("bat")]);
        search.begin_request();
        search.apply_failure("Error: 500 - boom".to_string());

        assert!(!search.is_loading);
        assert_eq!(search.words, vec![WordEntry::new("bat")]);
    }

    #[test]
    fn test_loading_and_error_never_both_set() {
        let mut search = SearchModel::new();
        search.begin_request();
        search.apply_failure("x".to_string());
        assert!(!(search.is_loading && !search.error.is_empty()));
        search.begin_request();
        assert!(!(search.is_loading && !search.error.is_empty()));
    }
}
