//! # dict-bot
//!
//! Telegram bot that looks up English words on dictionaryapi.dev and replies with definitions,
//! synonyms and antonyms. Wires dbot-core, handler-chain, dbot-telegram and dictionary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod health;
pub mod runner;

pub use cli::{handle_lookup, load_config, Cli, Commands};
pub use commands::Command;
pub use config::{BotConfig, DictionaryConfig};
pub use handlers::{CommandHandler, LoggingHandler, LookupHandler};
pub use runner::{build_handler_chain, run_bot};
