//! Lookup Response Handler
//!
//! Turns lookup service responses into search state. Responses for anything
//! but the most recently issued request are dropped.

use tracing::{debug, info, warn};

use crate::logic::errors::{classify_error, format_error_message};
use crate::logic::navigation::first_selection;
use crate::services::lookup::LookupResponse;
use crate::App;

pub fn handle_lookup_response(app: &mut App, response: LookupResponse) {
    let LookupResponse { seq, query, result } = response;

    if !app.model.search.is_current(seq) {
        debug!(
            seq,
            latest = app.model.search.latest_request,
            spelling = %query.spelling,
            "Discarding stale lookup response"
        );
        return;
    }

    match result {
        Ok(words) => {
            info!(seq, count = words.len(), spelling = %query.spelling, "Lookup succeeded");
            app.model.ui.selected_index = first_selection(words.len());
            app.model.search.apply_success(words);
        }
        Err(e) => {
            let error_type = classify_error(&e);
            warn!(
                seq,
                error_type = error_type.as_str(),
                status = ?e.status(),
                error = %e,
                "Lookup failed"
            );
            app.model.search.apply_failure(format_error_message(&e));
        }
    }
}
