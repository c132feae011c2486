//! Looks up the trimmed message text and replies with the formatted entry or the not-found message.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use dictionary::{format_entry, Dictionary, NOT_FOUND_MESSAGE};
use tracing::{debug, info, instrument};

pub struct LookupHandler {
    bot: Arc<dyn Bot>,
    dictionary: Arc<dyn Dictionary>,
}

impl LookupHandler {
    pub fn new(bot: Arc<dyn Bot>, dictionary: Arc<dyn Dictionary>) -> Self {
        Self { bot, dictionary }
    }
}

#[async_trait]
impl Handler for LookupHandler {
    /// Whitespace-only (or non-text) messages get no reply.
    #[instrument(skip(self, message), fields(user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let word = message.content.trim();
        if word.is_empty() {
            debug!(message_id = %message.id, "Empty message, no reply");
            return Ok(HandlerResponse::Stop);
        }

        let outcome = self.dictionary.lookup(word).await;
        info!(word = %word, outcome = outcome.kind(), "Lookup finished");

        let reply = match outcome.into_entry() {
            Some(entry) => format_entry(&entry),
            None => NOT_FOUND_MESSAGE.to_string(),
        };
        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
