use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Default Datamuse endpoint for spelling-pattern lookups
pub const DEFAULT_BASE_URL: &str = "https://api.datamuse.com/words";

/// Hard cap the word service allows per request
pub const MAX_RESULTS: u32 = 100;

/// A single word returned by the lookup service
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub num_syllables: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WordEntry {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            score: None,
            num_syllables: None,
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Query parameters for a prefix lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordQuery {
    /// Spelling pattern, e.g. "a*"
    pub spelling: String,
    pub max: u32,
}

impl WordQuery {
    /// Build the spelling pattern for words starting with `letter`
    pub fn starting_with(letter: char) -> Self {
        Self {
            spelling: format!("{}*", letter),
            max: MAX_RESULTS,
        }
    }

    /// Query string pairs as sent on the wire (`sp`, `max`)
    pub fn query_pairs(&self) -> [(&'static str, String); 2] {
        [("sp", self.spelling.clone()), ("max", self.max.to_string())]
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    /// Server answered with a non-success status
    #[error("Error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Server answered 2xx but the body was not a word list
    #[error("Error: {status} - Malformed response")]
    Malformed { status: u16 },

    /// No response at all (connect, DNS, client timeout, body read)
    #[error("Request failed: {0}")]
    Connectivity(#[source] reqwest::Error),

    #[error("Request timed out after {secs}s")]
    TimedOut { secs: u64 },
}

impl LookupError {
    /// HTTP status if the server responded
    pub fn status(&self) -> Option<u16> {
        match self {
            LookupError::Status { status, .. } | LookupError::Malformed { status } => Some(*status),
            LookupError::Connectivity(_) | LookupError::TimedOut { .. } => None,
        }
    }
}

/// Anything that can answer a word query.
///
/// The lookup service is generic over this so tests can drive it without a network.
pub trait WordSource: Clone + Send + Sync + 'static {
    fn search_words(
        &self,
        query: &WordQuery,
    ) -> impl Future<Output = Result<Vec<WordEntry>, LookupError>> + Send;
}

#[derive(Clone)]
pub struct DatamuseClient {
    base_url: String,
    client: Client,
}

impl DatamuseClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl WordSource for DatamuseClient {
    async fn search_words(&self, query: &WordQuery) -> Result<Vec<WordEntry>, LookupError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&query.query_pairs())
            .send()
            .await
            .map_err(LookupError::Connectivity)?;

        let status = response.status();
        if !status.is_success() {
            // Body is optional on failures; an unreadable one still has a status
            let body = response.text().await.unwrap_or_default();
            return Err(LookupError::Status {
                status: status.as_u16(),
                message: server_message(status, &body),
            });
        }

        let text = response.text().await.map_err(LookupError::Connectivity)?;
        parse_word_entries(&text).ok_or(LookupError::Malformed {
            status: status.as_u16(),
        })
    }
}

/// Extract the human-readable `message` from an error body, falling back to the reason phrase
pub fn server_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string())
}

/// Parse a lookup response body.
///
/// Returns `None` if the body is not a JSON array. Entries without a string
/// `word` are dropped.
pub fn parse_word_entries(body: &str) -> Option<Vec<WordEntry>> {
    let serde_json::Value::Array(values) = serde_json::from_str::<serde_json::Value>(body).ok()? else {
        return None;
    };

    let mut entries = Vec::with_capacity(values.len());
    for value in values {
        match serde_json::from_value::<WordEntry>(value) {
            Ok(entry) => entries.push(entry),
            Err(e) => tracing::warn!(error = %e, "Skipping malformed word entry"),
        }
    }

    Some(entries)
}
