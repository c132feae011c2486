//! Dispatcher runner: converts teloxide messages to core::Message and hands each one to the
//! HandlerChain in its own task. Stops when the given shutdown future resolves.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use dbot_core::{Message, ToCoreMessage};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;

/// Calls getMe and stores the bot's username (needed to parse `/cmd@botname`).
pub async fn fetch_bot_username(bot: &teloxide::Bot, bot_username: &RwLock<Option<String>>) {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                *bot_username.write().await = Some(username.clone());
                info!(username = %username, "Bot username set");
            }
        }
        Err(e) => warn!(error = %e, "getMe failed; commands addressed with @botname will not match"),
    }
}

/// Runs the handler chain for one message in its own task.
///
/// Errors are logged; a panic ends only this task and surfaces through the returned handle.
pub fn spawn_chain(chain: HandlerChain, message: Message) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "processing message"
        );
        if let Err(e) = chain.handle(&message).await {
            error!(error = %e, user_id = message.user.id, chat_id = message.chat.id, "Handler chain failed");
        }
    })
}

async fn on_message(msg: teloxide::types::Message, chain: HandlerChain) -> ResponseResult<()> {
    let core_msg = TelegramMessageWrapper(&msg).to_core();

    match msg.text() {
        Some(text) => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            message_content = %text,
            "Received message"
        ),
        None => info!(
            user_id = core_msg.user.id,
            chat_id = core_msg.chat.id,
            "Received non-text message"
        ),
    }

    // Detached: the dispatcher moves on to the next update immediately.
    let _ = spawn_chain(chain, core_msg);
    Ok(())
}

/// Fetches the bot username, then dispatches message updates to `handler_chain` until
/// `shutdown` resolves.
#[instrument(skip_all)]
pub async fn run_dispatcher<S>(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    bot_username: Arc<RwLock<Option<String>>>,
    shutdown: S,
) -> Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    fetch_bot_username(&bot, &bot_username).await;

    let handler = Update::filter_message().endpoint(on_message);
    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .build();

    let token = dispatcher.shutdown_token();
    tokio::spawn(async move {
        shutdown.await;
        info!("Shutting down dispatcher");
        match token.shutdown() {
            Ok(done) => done.await,
            Err(e) => warn!(error = ?e, "Dispatcher was not running at shutdown"),
        }
    });

    info!("Dispatcher started");
    dispatcher.dispatch().await;
    info!("Dispatcher stopped");

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C"),
            Err(e) => {
                error!(error = %e, "Failed to install Ctrl+C handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM");
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
