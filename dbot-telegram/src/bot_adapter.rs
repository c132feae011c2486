//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code sends messages via Telegram; tests can substitute another Bot impl.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Chat, DbotError, Result};
use teloxide::{prelude::*, types::ChatId};

use crate::split::{split_message, TELEGRAM_MESSAGE_LIMIT};

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    /// Text over Telegram's length limit goes out as several messages, in order.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        for part in split_message(text, TELEGRAM_MESSAGE_LIMIT) {
            self.bot
                .send_message(ChatId(chat.id), part)
                .await
                .map_err(|e| DbotError::Bot(e.to_string()))?;
        }
        Ok(())
    }
}
