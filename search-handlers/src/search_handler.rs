//! Search handler: validates the query text, acknowledges it, and replies with the lookup report.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::messages::{self, MSG_INVALID_QUERY};
use crate::report::ReportBuilder;

/// Queries shorter than this (in chars, before trimming) are rejected without a lookup.
pub const MIN_QUERY_LEN: usize = 4;

/// True if `query` is long enough to be looked up.
pub fn is_valid_query(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LEN
}

/// Handles every non-command text message as a lookup query.
#[derive(Clone)]
pub struct SearchHandler {
    bot: Arc<dyn CoreBot>,
    report_builder: ReportBuilder,
}

impl SearchHandler {
    pub fn new(bot: Arc<dyn CoreBot>, report_builder: ReportBuilder) -> Self {
        Self {
            bot,
            report_builder,
        }
    }
}

#[async_trait]
impl Handler for SearchHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.is_command() {
            return Ok(HandlerResponse::Ignore);
        }

        let query = message.content.as_str();
        if !is_valid_query(query) {
            self.bot.reply_to(message, MSG_INVALID_QUERY).await?;
            return Ok(HandlerResponse::Reply(MSG_INVALID_QUERY.to_string()));
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            query_len = query.chars().count(),
            "step: search started"
        );

        self.bot
            .reply_html(message, &messages::searching(query))
            .await?;

        let report = self.report_builder.generate_report(query).await;
        self.bot.reply_html(message, &report).await?;

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            report_len = report.chars().count(),
            "step: search finished"
        );

        Ok(HandlerResponse::Reply(report))
    }
}
