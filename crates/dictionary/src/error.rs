use thiserror::Error;

/// Errors building a [`crate::DictionaryClient`]. Lookup failures are not errors; they are
/// reported as [`crate::LookupOutcome`] variants.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Invalid dictionary API base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}
