//! # dbot-telegram
//!
//! Telegram bot framework layer: adapters, [`dbot_core::Bot`] implementation, minimal config,
//! and the dispatcher that feeds each update to a handler chain in its own task.
//! Handles only Telegram connectivity; no dictionary logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;
mod split;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{fetch_bot_username, run_dispatcher, shutdown_signal, spawn_chain};
pub use split::{split_message, TELEGRAM_MESSAGE_LIMIT};
