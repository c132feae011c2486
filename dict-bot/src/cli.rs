//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dictionary::{format_entry, Dictionary, DictionaryClient, NOT_FOUND_MESSAGE};

use crate::config::{BotConfig, DictionaryConfig};

#[derive(Parser)]
#[command(name = "dict-bot")]
#[command(about = "Telegram dictionary bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Look up one word and print the reply the bot would send.
    Lookup { word: String },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}

/// Handles `lookup`: prints the formatted entry, or the not-found message plus the reason on stderr.
pub async fn handle_lookup(word: &str) -> Result<()> {
    let config = DictionaryConfig::from_env()?;
    config.validate()?;
    let client = DictionaryClient::new(&config.api_url, config.timeout())?;

    let word = word.trim();
    if word.is_empty() {
        anyhow::bail!("word is empty");
    }

    let outcome = client.lookup(word).await;
    let kind = outcome.kind();
    match outcome.into_entry() {
        Some(entry) => print!("{}", format_entry(&entry)),
        None => {
            println!("{}", NOT_FOUND_MESSAGE);
            eprintln!("lookup outcome: {}", kind);
        }
    }
    Ok(())
}
