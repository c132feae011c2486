//! Bot configuration: Telegram connectivity + dictionary lookup + process settings. Loaded from env.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use dbot_telegram::TelegramConfig;

/// Dictionary API settings. Needed by both `run` and `lookup`.
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    /// DICTIONARY_API_URL
    pub api_url: String,
    /// LOOKUP_TIMEOUT_SECS
    pub timeout_secs: u64,
}

impl DictionaryConfig {
    pub fn from_env() -> Result<Self> {
        let api_url = env::var("DICTIONARY_API_URL")
            .unwrap_or_else(|_| dictionary::DEFAULT_BASE_URL.to_string());
        let timeout_secs = match env::var("LOOKUP_TIMEOUT_SECS") {
            Ok(s) => s
                .trim()
                .parse()
                .with_context(|| format!("LOOKUP_TIMEOUT_SECS is not a number: {}", s))?,
            Err(_) => dictionary::DEFAULT_TIMEOUT.as_secs(),
        };
        Ok(Self {
            api_url,
            timeout_secs,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("DICTIONARY_API_URL is not a valid URL: {}", self.api_url);
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("LOOKUP_TIMEOUT_SECS must be greater than zero");
        }
        Ok(())
    }
}

/// Full bot config. Use [`BotConfig::load`] then [`BotConfig::validate`].
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub dictionary: DictionaryConfig,
    /// PORT; liveness server is off when unset.
    pub port: Option<u16>,
    /// LOG_FILE
    pub log_file: String,
    /// SOURCE_URL, returned by /source.
    pub source_url: Option<String>,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        let dictionary = DictionaryConfig::from_env()?;
        let port = match env::var("PORT") {
            Ok(s) => Some(
                s.trim()
                    .parse()
                    .with_context(|| format!("PORT is not a valid port number: {}", s))?,
            ),
            Err(_) => None,
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/dict-bot.log".to_string());
        let source_url = env::var("SOURCE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        Ok(Self {
            telegram,
            dictionary,
            port,
            log_file,
            source_url,
        })
    }

    /// Fail fast on malformed URLs or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.dictionary.validate()?;
        if let Some(ref url) = self.source_url {
            if reqwest::Url::parse(url).is_err() {
                anyhow::bail!("SOURCE_URL is not a valid URL: {}", url);
            }
        }
        Ok(())
    }
}
