//! # Handler chain
//!
//! Runs a sequence of handlers for one message. All `before` hooks run in order (any `false`
//! stops the chain); then `handle` runs in order until one returns Stop or Reply; then all
//! `after` hooks run in reverse order with the final response.

use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse.
    ///
    /// An error from any hook aborts the chain and is returned as-is; remaining hooks are skipped.
    #[instrument(skip(self, message), fields(user_id = message.user.id, chat_id = message.chat.id))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        debug!(message_id = %message.id, handlers = self.handlers.len(), "handler chain started");

        for h in &self.handlers {
            if !h.before(message).await? {
                info!(handler = %handler_name(h), "before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let response = h.handle(message).await?;
            debug!(handler = %handler_name(h), response = ?response, "handler processed");
            if matches!(response, HandlerResponse::Stop | HandlerResponse::Reply(_)) {
                final_response = response;
                break;
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        let (response_type, reply_len) = match &final_response {
            HandlerResponse::Continue => ("Continue", None),
            HandlerResponse::Stop => ("Stop", None),
            HandlerResponse::Ignore => ("Ignore", None),
            HandlerResponse::Reply(s) => ("Reply", Some(s.len())),
        };
        info!(
            message_id = %message.id,
            response_type = %response_type,
            reply_len = ?reply_len,
            "handler chain finished"
        );

        Ok(final_response)
    }
}

fn handler_name(h: &Arc<dyn Handler>) -> &'static str {
    std::any::type_name_of_val(h.as_ref())
}

// Tests live in tests/handler_chain_test.rs
