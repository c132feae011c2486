//! # dictionary
//!
//! Looks up English words on the dictionaryapi.dev API and formats the result as chat text.
//!
//! - [`DictionaryClient`] issues one `GET {base}/api/v2/entries/en/{word}` per lookup and
//!   normalizes the response into a [`LookupOutcome`].
//! - [`format_entry`] renders a [`WordEntry`] as a multi-line reply.

mod client;
mod error;
mod format;
mod types;

pub use client::{Dictionary, DictionaryClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::DictionaryError;
pub use format::{format_entry, NOT_FOUND_MESSAGE};
pub use types::{LookupOutcome, MeaningEntry, WordEntry};
