//! HTTP lookup against dictionaryapi.dev.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use tracing::{info, instrument, warn};

use crate::error::DictionaryError;
use crate::types::{ApiEntry, LookupOutcome, WordEntry};

/// Public dictionaryapi.dev host.
pub const DEFAULT_BASE_URL: &str = "https://api.dictionaryapi.dev";

/// Request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Looks up a single word. Implemented by [`DictionaryClient`]; handlers depend on this trait.
#[async_trait]
pub trait Dictionary: Send + Sync {
    async fn lookup(&self, word: &str) -> LookupOutcome;
}

/// dictionaryapi.dev client. Cheap to clone; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct DictionaryClient {
    client: reqwest::Client,
    base_url: Url,
}

impl DictionaryClient {
    /// Creates a client for `base_url` (e.g. [`DEFAULT_BASE_URL`]) with a per-request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, DictionaryError> {
        let base_url = Url::parse(base_url).map_err(|e| DictionaryError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DictionaryError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Builds `{base}/api/v2/entries/en/{word}` with `word` percent-encoded as one path segment.
    pub fn entry_url(&self, word: &str) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL can always be a base.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "v2", "entries", "en", word]);
        }
        url
    }

    /// Fetches `word` and normalizes the first lexical entry of the response.
    async fn fetch(&self, word: &str) -> LookupOutcome {
        let response = match self.client.get(self.entry_url(word)).send().await {
            Ok(response) => response,
            Err(e) => return LookupOutcome::Transport(e.to_string()),
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return LookupOutcome::NotFound;
        }
        if !status.is_success() {
            return LookupOutcome::Transport(format!("unexpected status {}", status));
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => return LookupOutcome::Transport(e.to_string()),
        };
        let entries: Vec<ApiEntry> = match serde_json::from_slice(&body) {
            Ok(entries) => entries,
            Err(e) => return LookupOutcome::Parse(e.to_string()),
        };
        // Later lexical entries are dropped.
        let Some(first) = entries.into_iter().next() else {
            return LookupOutcome::Parse("empty entry list".to_string());
        };
        match WordEntry::try_from(first) {
            Ok(entry) => LookupOutcome::Found(entry),
            Err(reason) => LookupOutcome::Parse(reason),
        }
    }
}

#[async_trait]
impl Dictionary for DictionaryClient {
    #[instrument(skip(self))]
    async fn lookup(&self, word: &str) -> LookupOutcome {
        let outcome = self.fetch(word).await;
        match &outcome {
            LookupOutcome::Found(entry) => {
                info!(word = %word, meanings = entry.meanings.len(), "dictionary lookup found entry")
            }
            LookupOutcome::NotFound => info!(word = %word, "dictionary has no entry"),
            LookupOutcome::Transport(detail) => {
                warn!(word = %word, error = %detail, "dictionary request failed")
            }
            LookupOutcome::Parse(detail) => {
                warn!(word = %word, error = %detail, "dictionary response malformed")
            }
        }
        outcome
    }
}
