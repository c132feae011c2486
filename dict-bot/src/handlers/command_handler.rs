//! Answers /start, /source and /help; everything else continues to the lookup handler.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use teloxide::utils::command::BotCommands;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::commands::{greeting, source_reply, Command};

pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    /// Filled by getMe at startup; None until then.
    bot_username: Arc<RwLock<Option<String>>>,
    source_url: Option<String>,
}

impl CommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        bot_username: Arc<RwLock<Option<String>>>,
        source_url: Option<String>,
    ) -> Self {
        Self {
            bot,
            bot_username,
            source_url,
        }
    }

    fn reply_for(&self, command: &Command, message: &Message) -> String {
        match command {
            Command::Start => greeting(message.user.first_name.as_deref()),
            Command::Source => source_reply(self.source_url.as_deref()),
            Command::Help => Command::descriptions().to_string(),
        }
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let command = {
            let username = self.bot_username.read().await;
            Command::parse_first_word(&message.content, username.as_deref())
        };
        let Some(command) = command else {
            return Ok(HandlerResponse::Continue);
        };

        info!(user_id = message.user.id, command = ?command, "Command received");
        let reply = self.reply_for(&command, message);
        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
