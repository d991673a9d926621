//! Application configuration
//!
//! One explicit struct built from the environment at startup and handed to
//! the fronts. Nothing below this layer reads the process environment.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How the Telegram bot answers text messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotMode {
    /// Answer locally through the reply resolver.
    Echo,
    /// Relay the raw text to the completion API.
    Relay,
}

impl FromStr for BotMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "echo" => Ok(BotMode::Echo),
            "relay" => Ok(BotMode::Relay),
            other => anyhow::bail!("unknown BOT_MODE: {other} (expected \"echo\" or \"relay\")"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub contact_email: String,
    pub contact_phone: String,
    pub telegram_token: Option<String>,
    pub completion_api_key: Option<String>,
    pub completion_base_url: String,
    pub completion_model: String,
    pub bot_mode: BotMode,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".into()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            contact_email: env::var("CONTACT_EMAIL")
                .unwrap_or_else(|_| "hello@otvetnik.dev".into()),
            contact_phone: env::var("CONTACT_PHONE")
                .unwrap_or_else(|_| "+7 900 000-00-00".into()),
            telegram_token: env::var("TELEGRAM_BOT_TOKEN").ok(),
            completion_api_key: env::var("OPENAI_API_KEY").ok(),
            completion_base_url: env::var("COMPLETION_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".into()),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".into()),
            bot_mode: env::var("BOT_MODE")
                .unwrap_or_else(|_| "echo".into())
                .parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bot_mode_parses_known_values() {
        assert_eq!("echo".parse::<BotMode>().unwrap(), BotMode::Echo);
        assert_eq!("relay".parse::<BotMode>().unwrap(), BotMode::Relay);
        assert_eq!("RELAY".parse::<BotMode>().unwrap(), BotMode::Relay);
    }

    #[test]
    fn bot_mode_rejects_unknown_values() {
        assert!("forward".parse::<BotMode>().is_err());
        assert!("".parse::<BotMode>().is_err());
    }
}
