//! # lookup-bot
//!
//! Telegram bot that relays free-text queries to the lookup API and replies with a formatted report.
//! Config is read once from env (and CLI flags) and shared read-only.

pub mod app;
pub mod cli;
pub mod config;

pub use app::{build_handler_chain, run_bot};
pub use cli::{Cli, Commands};
pub use config::{log_file_from_env, BotConfig, DEFAULT_LOG_FILE};
