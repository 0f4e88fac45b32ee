//! Search screen runtime
//!
//! `App` owns the model plus the channels to the lookup service. Everything
//! the user can do to the screen goes through here or through `handlers`.

use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::api::{WordQuery, WordSource};
use crate::handlers;
use crate::logic::validation::{validate_letter, INVALID_INPUT_MESSAGE, INVALID_INPUT_TITLE};
use crate::model::Model;
use crate::services::lookup::{spawn_lookup_service, LookupRequest, LookupResponse};

pub struct App {
    pub model: Model,

    lookup_tx: mpsc::UnboundedSender<LookupRequest>,
    lookup_rx: mpsc::UnboundedReceiver<LookupResponse>,
}

impl App {
    /// Build an app around existing lookup channels
    pub fn new(
        lookup_tx: mpsc::UnboundedSender<LookupRequest>,
        lookup_rx: mpsc::UnboundedReceiver<LookupResponse>,
    ) -> Self {
        Self {
            model: Model::new(),
            lookup_tx,
            lookup_rx,
        }
    }

    /// Build an app and spawn a lookup service for `source`
    pub fn with_source<S: WordSource>(source: S, timeout: Duration) -> Self {
        let (lookup_tx, lookup_rx) = spawn_lookup_service(source, timeout);
        Self::new(lookup_tx, lookup_rx)
    }

    /// Validate the input and, if it is a single letter, issue one lookup.
    ///
    /// Returns true if a request was sent. Invalid input opens the
    /// "Invalid Input" alert and leaves search state untouched.
    pub fn trigger_search(&mut self) -> bool {
        let letter = match validate_letter(&self.model.search.letter) {
            Ok(letter) => letter,
            Err(e) => {
                debug!(error = %e, input = ?self.model.search.letter, "Rejected search input");
                self.model.ui.show_alert(INVALID_INPUT_TITLE, INVALID_INPUT_MESSAGE);
                return false;
            }
        };

        let seq = self.model.search.begin_request();
        let query = WordQuery::starting_with(letter);
        info!(seq, %letter, spelling = %query.spelling, "Searching words");

        if self.lookup_tx.send(LookupRequest { seq, query }).is_err() {
            // Worker gone: nothing will ever answer this request
            self.model
                .search
                .apply_failure(crate::logic::errors::CONNECTIVITY_MESSAGE.to_string());
            return false;
        }
        true
    }

    /// Apply every response that has arrived (non-blocking). Returns how many were handled.
    pub fn drain_responses(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(response) = self.lookup_rx.try_recv() {
            handlers::handle_lookup_response(self, response);
            handled += 1;
        }
        handled
    }

    /// Wait for the next response and apply it. Returns false if the service is gone.
    pub async fn wait_for_response(&mut self) -> bool {
        match self.lookup_rx.recv().await {
            Some(response) => {
                handlers::handle_lookup_response(self, response);
                true
            }
            None => false,
        }
    }

    /// Advance per-frame UI state
    pub fn tick(&mut self) {
        if self.model.search.is_loading {
            self.model.ui.spinner_tick = self.model.ui.spinner_tick.wrapping_add(1);
        }
    }
}
