//! Telegram front
//!
//! Long-polling dispatcher: `/start` answers with a fixed online notice,
//! any other text goes through the configured reply backend. A failed
//! handler is fatal for that single message - the error is logged by the
//! dispatcher and no fallback reply is sent.

use std::sync::Arc;

use teloxide::dptree;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use thiserror::Error;
use tracing::debug;

use crate::core;
use crate::gateway::{CompletionClient, GatewayError};

const ONLINE_NOTICE: &str = "Я онлайн ✅";

#[derive(Debug, Error)]
pub enum BotError {
    #[error("Telegram request failed: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Completion gateway failed: {0}")]
    Gateway(#[from] GatewayError),
}

/// Where text messages get their replies.
pub enum ReplyBackend {
    /// The local reply resolver.
    Local,
    /// Relay to the completion API, reply passed back verbatim.
    Remote(CompletionClient),
}

pub struct BotState {
    pub backend: ReplyBackend,
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
enum Command {
    #[command(description = "check that the bot is online")]
    Start,
}

/// Run the dispatcher until the process is stopped.
pub async fn run(bot: Bot, state: Arc<BotState>) {
    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(on_command),
        )
        .branch(Update::filter_message().endpoint(on_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .error_handler(LoggingErrorHandler::with_custom_text(
            "Message handler failed",
        ))
        .build()
        .dispatch()
        .await;
}

async fn on_command(bot: Bot, msg: Message, command: Command) -> Result<(), BotError> {
    match command {
        Command::Start => {
            bot.send_message(msg.chat.id, ONLINE_NOTICE).await?;
        }
    }
    Ok(())
}

async fn on_message(bot: Bot, msg: Message, state: Arc<BotState>) -> Result<(), BotError> {
    // Stickers, photos and the like carry no text and are ignored
    let Some(text) = msg.text() else {
        return Ok(());
    };

    debug!(chat_id = msg.chat.id.0, "handling text message");

    let reply = reply_for(text, &state).await?;
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

/// The bot front carries no history, so local replies resolve against an
/// empty one.
async fn reply_for(text: &str, state: &BotState) -> Result<String, BotError> {
    match &state.backend {
        ReplyBackend::Local => Ok(core::resolve(text, &[]).reply),
        ReplyBackend::Remote(gateway) => Ok(gateway.complete(text).await?),
    }
}
