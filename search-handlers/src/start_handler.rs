//! `/start` handler: replies with the welcome text.

use async_trait::async_trait;
use dbot_core::{Bot as CoreBot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::messages::MSG_WELCOME;

const START_COMMAND: &str = "start";

#[derive(Clone)]
pub struct StartHandler {
    bot: Arc<dyn CoreBot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn CoreBot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if message.command() != Some(START_COMMAND) {
            return Ok(HandlerResponse::Continue);
        }

        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            "Start command"
        );
        self.bot.reply_html(message, MSG_WELCOME).await?;
        Ok(HandlerResponse::Reply(MSG_WELCOME.to_string()))
    }
}
