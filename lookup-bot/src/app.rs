//! Wiring: builds the handler chain from config and runs the webhook.

use anyhow::Result;
use dbot_core::Bot as CoreBot;
use dbot_telegram::{build_teloxide_bot, run_webhook, TelegramBotAdapter};
use handler_chain::HandlerChain;
use lookup_client::{mask_token, HttpLookupClient, LookupClient};
use search_handlers::{ReportBuilder, ReportSettings, SearchHandler, StartHandler};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::config::BotConfig;

/// `/start` first, then the search handler for every other text message.
pub fn build_handler_chain(
    bot: Arc<dyn CoreBot>,
    lookup: Arc<dyn LookupClient>,
    report: ReportSettings,
) -> HandlerChain {
    let report_builder = ReportBuilder::new(lookup, report);
    HandlerChain::new()
        .add_handler(Arc::new(StartHandler::new(bot.clone())))
        .add_handler(Arc::new(SearchHandler::new(bot, report_builder)))
}

/// Builds clients and the chain, then serves the webhook until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    if config.lookup.api_token.is_empty() {
        warn!("EXTERNAL_API_TOKEN is empty; the lookup API will likely reject requests");
    }

    info!(
        api_url = %config.lookup.api_url,
        api_token = %mask_token(&config.lookup.api_token),
        limit = config.lookup.limit,
        lang = %config.lookup.lang,
        report_max_len = config.report.max_len,
        aliases = config.report.aliases.len(),
        port = config.telegram.port,
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config.telegram)?;
    let bot: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let lookup: Arc<dyn LookupClient> = Arc::new(HttpLookupClient::new(config.lookup.clone())?);
    let handler_chain = build_handler_chain(bot, lookup, config.report.clone());

    info!("Bot started successfully");

    run_webhook(teloxide_bot, handler_chain, &config.telegram).await
}
