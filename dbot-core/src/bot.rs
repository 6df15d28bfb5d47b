//! Bot abstraction for sending messages.
//!
//! [`Bot`] is transport-agnostic; the Telegram implementation lives in dbot-telegram.

use crate::error::Result;
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a message rendered with the restricted HTML subset (`<b>`, `<pre>`, `<code>`).
    async fn send_html(&self, chat: &Chat, html: &str) -> Result<()>;

    /// Sends a plain text reply to the given message (same chat). Transports without threading
    /// fall back to [`Bot::send_message`].
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    /// HTML counterpart of [`Bot::reply_to`].
    async fn reply_html(&self, message: &Message, html: &str) -> Result<()> {
        self.send_html(&message.chat, html).await
    }
}
