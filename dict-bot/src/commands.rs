//! Slash commands understood by the bot. Registered with Telegram at startup.

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "show the welcome message.")]
    Start,
    #[command(description = "show where the source code lives.")]
    Source,
    #[command(description = "list the commands.")]
    Help,
}

impl Command {
    /// Parses the first word of `text` as a command addressed to this bot.
    ///
    /// Trailing words are ignored (`/start payload` is `Start`). `None` for plain text, unknown
    /// commands, and commands addressed to another bot.
    pub fn parse_first_word(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let first = text.split_whitespace().next()?;
        if !first.starts_with('/') {
            return None;
        }
        Self::parse(first, bot_username.unwrap_or_default()).ok()
    }
}

/// `/start` reply.
pub fn greeting(first_name: Option<&str>) -> String {
    let name = first_name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("there");
    format!(
        "👋 Hi {}, I can help you find the definitions, synonyms, and antonyms of words! \
         Just type any word and I will send the details for you.",
        name
    )
}

/// `/source` reply.
pub fn source_reply(source_url: Option<&str>) -> String {
    match source_url {
        Some(url) => format!("📦 Source code: {}", url),
        None => "📦 The source link has not been configured for this bot.".to_string(),
    }
}
