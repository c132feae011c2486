//! Error types for the bot core.
//!
//! [`DbotError`] is returned by handlers and the [`crate::Bot`] transport.

use thiserror::Error;

/// Top-level error for dbot (currently only transport failures).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
