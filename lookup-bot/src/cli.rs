//! Command line: `lookup-bot run`, with flags that override env config.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lookup-bot")]
#[command(about = "Telegram lookup bot: relays queries to the lookup API over a webhook", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register the webhook and serve updates (config from env; flags override).
    Run {
        /// Overrides TELEGRAM_BOT_TOKEN.
        #[arg(short, long)]
        token: Option<String>,
        /// Overrides WEBHOOK_URL.
        #[arg(short, long)]
        webhook_url: Option<String>,
        /// Overrides PORT.
        #[arg(short, long)]
        port: Option<u16>,
    },
}
