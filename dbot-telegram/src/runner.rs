//! Webhook runner: registers `<WEBHOOK_URL>/<token>`, converts each text message to core::Message and
//! runs the HandlerChain on its own task. [`dispatch_with_fallback`] is the single place that turns a
//! handler failure into a log entry plus the generic error reply.

use anyhow::{Context, Result};
use dbot_core::{Bot as CoreBot, DbotError, Message, ToCoreMessage};
use futures::FutureExt;
use handler_chain::HandlerChain;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use tracing::{debug, error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::bot_adapter::TelegramBotAdapter;
use super::config::TelegramConfig;

/// Sent to the chat when handling an update fails.
pub const INTERNAL_ERROR_REPLY: &str =
    "An internal error occurred while processing your request. Please try again later.";

/// Builds the teloxide Bot, pointing at TELEGRAM_API_URL when configured.
pub fn build_teloxide_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url) => {
            let url = reqwest::Url::parse(url).context("TELEGRAM_API_URL is not a valid URL")?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Runs the chain for one message. Never fails: an error or panic is logged at warn and answered
/// with [`INTERNAL_ERROR_REPLY`]; if that reply cannot be sent either, the failure is only logged.
pub async fn dispatch_with_fallback(chain: &HandlerChain, bot: &dyn CoreBot, message: &Message) {
    let outcome = AssertUnwindSafe(chain.handle(message)).catch_unwind().await;

    let err = match outcome {
        Ok(Ok(response)) => {
            debug!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                response = ?response,
                "Update handled"
            );
            return;
        }
        Ok(Err(e)) => e,
        Err(_) => DbotError::Handler("handler panicked".to_string()),
    };

    warn!(
        error = %err,
        user_id = message.user.id,
        chat_id = message.chat.id,
        message_id = %message.id,
        "Update caused error"
    );

    if let Err(e) = bot.reply_to(message, INTERNAL_ERROR_REPLY).await {
        error!(
            error = %e,
            chat_id = message.chat.id,
            "Failed to send internal error reply"
        );
    }
}

/// Registers the webhook and serves updates until shutdown. Each text message runs on its own task.
#[instrument(skip(bot, handler_chain, config))]
pub async fn run_webhook(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    config: &TelegramConfig,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => {
            if let Some(username) = &me.user.username {
                info!(username = %username, "Bot identity confirmed");
            }
        }
        Err(e) => warn!(error = %e, "getMe failed; continuing with webhook setup"),
    }

    let url = reqwest::Url::parse(&config.webhook_endpoint())
        .context("WEBHOOK_URL does not form a valid webhook URL")?;
    let addr = config.listen_addr();
    let listener = webhooks::axum(bot.clone(), webhooks::Options::new(addr, url))
        .await
        .context("Failed to register webhook")?;

    info!(
        address = %addr,
        webhook_base = %config.webhook_url,
        "Webhook listening"
    );

    let reply_bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(bot.clone()));
    let chain = handler_chain;

    teloxide::repl_with_listener(
        bot,
        move |msg: teloxide::types::Message| {
            let chain = chain.clone();
            let reply_bot = reply_bot.clone();

            async move {
                let core_msg = TelegramMessageWrapper(&msg).to_core();

                if msg.text().is_none() {
                    info!(
                        user_id = core_msg.user.id,
                        chat_id = core_msg.chat.id,
                        "Received non-text message, ignored"
                    );
                    return respond(());
                }

                info!(
                    user_id = core_msg.user.id,
                    chat_id = core_msg.chat.id,
                    message_id = %core_msg.id,
                    "Received message"
                );

                tokio::spawn(async move {
                    dispatch_with_fallback(&chain, reply_bot.as_ref(), &core_msg).await;
                });

                respond(())
            }
        },
        listener,
    )
    .await;

    Ok(())
}
