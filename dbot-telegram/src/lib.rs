//! # dbot-telegram
//!
//! Telegram transport layer: adapters, [`dbot_core::Bot`] implementation with HTML replies,
//! webhook config, and the webhook runner with its error fallback.
//! Handles only Telegram connectivity and handler-chain execution; no lookup or report logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{parse_message_id, TelegramBotAdapter};
pub use config::{TelegramConfig, DEFAULT_PORT};
pub use runner::{build_teloxide_bot, dispatch_with_fallback, run_webhook, INTERNAL_ERROR_REPLY};
