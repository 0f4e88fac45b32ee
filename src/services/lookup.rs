use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::{LookupError, WordEntry, WordQuery, WordSource};

/// A lookup the UI wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub seq: u64,
    pub query: WordQuery,
}

/// Result of a lookup, tagged with the sequence number of its request
#[derive(Debug)]
pub struct LookupResponse {
    pub seq: u64,
    pub query: WordQuery,
    pub result: Result<Vec<WordEntry>, LookupError>,
}

/// Background worker that runs lookups against a `WordSource`.
///
/// At most one lookup is in flight: a newer request aborts the older one.
pub struct LookupService<S: WordSource> {
    source: S,
    timeout: Duration,
    response_tx: mpsc::UnboundedSender<LookupResponse>,
    in_flight: Option<(u64, JoinHandle<()>)>,
}

impl<S: WordSource> LookupService<S> {
    pub fn new(
        source: S,
        timeout: Duration,
        response_tx: mpsc::UnboundedSender<LookupResponse>,
    ) -> Self {
        Self {
            source,
            timeout,
            response_tx,
            in_flight: None,
        }
    }

    /// Start a lookup, superseding whatever is still running
    fn dispatch(&mut self, request: LookupRequest) {
        self.cancel_in_flight("superseded");

        let source = self.source.clone();
        let response_tx = self.response_tx.clone();
        let timeout = self.timeout;
        let seq = request.seq;

        let handle = tokio::spawn(async move {
            let LookupRequest { seq, query } = request;
            debug!(seq, spelling = %query.spelling, "Lookup started");

            let result = execute_lookup(&source, &query, timeout).await;

            debug!(seq, ok = result.is_ok(), "Lookup finished");
            let _ = response_tx.send(LookupResponse { seq, query, result });
        });

        self.in_flight = Some((seq, handle));
    }

    fn cancel_in_flight(&mut self, reason: &str) {
        if let Some((seq, handle)) = self.in_flight.take() {
            if !handle.is_finished() {
                debug!(seq, reason, "Aborting in-flight lookup");
                handle.abort();
            }
        }
    }
}

/// Run one lookup with an outer time bound
pub async fn execute_lookup<S: WordSource>(
    source: &S,
    query: &WordQuery,
    timeout: Duration,
) -> Result<Vec<WordEntry>, LookupError> {
    match tokio::time::timeout(timeout, source.search_words(query)).await {
        Ok(result) => result,
        Err(_) => Err(LookupError::TimedOut {
            secs: timeout.as_secs(),
        }),
    }
}

/// Spawn the lookup service worker
///
/// Dropping the returned sender shuts the worker down and aborts any
/// lookup still in flight.
pub fn spawn_lookup_service<S: WordSource>(
    source: S,
    timeout: Duration,
) -> (
    mpsc::UnboundedSender<LookupRequest>,
    mpsc::UnboundedReceiver<LookupResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<LookupRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<LookupResponse>();

    tokio::spawn(async move {
        let mut service = LookupService::new(source, timeout, response_tx);

        while let Some(request) = request_rx.recv().await {
            service.dispatch(request);
        }

        service.cancel_in_flight("screen closed");
        debug!("Lookup service stopped");
    });

    (request_tx, response_rx)
}
