//! Wires config, Telegram bot, dictionary client and handler chain; runs until a shutdown signal.

use std::sync::Arc;

use anyhow::{Context, Result};
use dbot_core::{init_tracing, Bot};
use dbot_telegram::{run_dispatcher, shutdown_signal, TelegramBotAdapter};
use dictionary::{Dictionary, DictionaryClient};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tokio::sync::{watch, RwLock};
use tracing::{error, info, instrument, warn};

use crate::commands::Command;
use crate::config::BotConfig;
use crate::handlers::{CommandHandler, LoggingHandler, LookupHandler};
use crate::health;

/// Builds the per-message chain: logging → commands → lookup.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    dictionary: Arc<dyn Dictionary>,
    bot_username: Arc<RwLock<Option<String>>>,
    source_url: Option<String>,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(CommandHandler::new(
            bot.clone(),
            bot_username,
            source_url,
        )))
        .add_handler(Arc::new(LookupHandler::new(bot, dictionary)))
}

/// Registers the command list shown in Telegram clients. Failure is logged, not fatal.
async fn register_commands(bot: &teloxide::Bot) {
    match bot.set_my_commands(Command::bot_commands()).await {
        Ok(_) => info!("Bot commands registered"),
        Err(e) => warn!(error = %e, "Failed to register bot commands"),
    }
}

async fn wait_for_shutdown(mut rx: watch::Receiver<bool>) {
    let _ = rx.wait_for(|stopped| *stopped).await;
}

/// Main entry: validate config, init logging, build components, then dispatch until SIGINT/SIGTERM.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        dictionary_api_url = %config.dictionary.api_url,
        lookup_timeout_secs = config.dictionary.timeout_secs,
        port = ?config.port,
        "Initializing bot"
    );

    let teloxide_bot = config.telegram.build_bot()?;
    let dictionary = DictionaryClient::new(&config.dictionary.api_url, config.dictionary.timeout())
        .context("Failed to build dictionary client")?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let bot_username = Arc::new(RwLock::new(None));
    let chain = build_handler_chain(
        bot,
        Arc::new(dictionary),
        bot_username.clone(),
        config.source_url.clone(),
    );

    register_commands(&teloxide_bot).await;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    if let Some(port) = config.port {
        let rx = shutdown_rx.clone();
        tokio::spawn(async move {
            if let Err(e) = health::serve(port, wait_for_shutdown(rx)).await {
                error!(error = %e, "Liveness server stopped");
            }
        });
    }

    info!("📚 Dictionary bot is online!");
    run_dispatcher(teloxide_bot, chain, bot_username, wait_for_shutdown(shutdown_rx)).await?;
    info!("Bot stopped");

    Ok(())
}
