//! Telegram bot entry point
//!
//! Fails fast when required credentials are missing: the bot token always,
//! the completion API key only in relay mode.

use std::sync::Arc;

use anyhow::Context;
use teloxide::Bot;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use otvetnik::bot::{self, BotState, ReplyBackend};
use otvetnik::config::{BotMode, Config};
use otvetnik::gateway::{CompletionClient, CompletionConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "otvetnik=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let token = config
        .telegram_token
        .clone()
        .context("TELEGRAM_BOT_TOKEN must be set")?;

    let backend = match config.bot_mode {
        BotMode::Echo => ReplyBackend::Local,
        BotMode::Relay => {
            let api_key = config
                .completion_api_key
                .clone()
                .context("OPENAI_API_KEY must be set in relay mode")?;

            let gateway = CompletionClient::new(CompletionConfig {
                base_url: config.completion_base_url.clone(),
                model: config.completion_model.clone(),
                ..CompletionConfig::new(api_key)
            });
            ReplyBackend::Remote(gateway)
        }
    };

    tracing::info!("✅ Telegram bot starting (mode: {:?})", config.bot_mode);

    let bot = Bot::new(token);
    bot::run(bot, Arc::new(BotState { backend })).await;

    Ok(())
}
