//! Binary for the lookup bot (webhook mode).

use anyhow::Result;
use clap::Parser;
use lookup_bot::{log_file_from_env, run_bot, BotConfig, Cli, Commands};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    dbot_core::init_tracing(&log_file_from_env())?;

    match cli.command {
        Commands::Run {
            token,
            webhook_url,
            port,
        } => {
            let config = BotConfig::load(token, webhook_url, port).and_then(|c| {
                c.validate()?;
                Ok(c)
            });
            let config = match config {
                Ok(config) => config,
                Err(e) => {
                    error!(error = %e, "!!! FATAL ERROR: required configuration is missing or invalid; not starting");
                    return Err(e);
                }
            };
            run_bot(config).await
        }
    }
}
