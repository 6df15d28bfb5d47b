//! Shared mocks for search-handlers tests: a recording Bot and a canned LookupClient.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use dbot_core::{Bot as CoreBot, Chat, DbotError, Message, Result as DbotResult, User};
use lookup_client::{LookupClient, LookupError, LookupResponse};
use serde_json::Value;

/// A message the mock bot was asked to send.
#[derive(Debug, Clone, PartialEq)]
pub struct Sent {
    pub chat_id: i64,
    pub text: String,
    pub html: bool,
    /// Id of the message this was sent in reply to, if threaded.
    pub reply_to: Option<String>,
}

/// Mock Bot: records every send; optionally fails all sends.
#[derive(Default)]
pub struct MockBot {
    pub sent: Mutex<Vec<Sent>>,
    pub fail: bool,
}

impl MockBot {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    fn record(
        &self,
        chat: &Chat,
        text: &str,
        html: bool,
        reply_to: Option<&Message>,
    ) -> DbotResult<()> {
        if self.fail {
            return Err(DbotError::Bot("send failed".to_string()));
        }
        self.sent.lock().unwrap().push(Sent {
            chat_id: chat.id,
            text: text.to_string(),
            html,
            reply_to: reply_to.map(|m| m.id.clone()),
        });
        Ok(())
    }
}

#[async_trait]
impl CoreBot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> DbotResult<()> {
        self.record(chat, text, false, None)
    }

    async fn send_html(&self, chat: &Chat, html: &str) -> DbotResult<()> {
        self.record(chat, html, true, None)
    }

    async fn reply_to(&self, message: &Message, text: &str) -> DbotResult<()> {
        self.record(&message.chat, text, false, Some(message))
    }

    async fn reply_html(&self, message: &Message, html: &str) -> DbotResult<()> {
        self.record(&message.chat, html, true, Some(message))
    }
}

/// Mock LookupClient: counts calls, remembers the last query, returns a fixed outcome.
pub struct MockLookupClient {
    pub calls: AtomicUsize,
    pub last_query: Mutex<Option<String>>,
    outcome: Result<LookupResponse, LookupError>,
}

impl MockLookupClient {
    pub fn returning(value: Value) -> Arc<Self> {
        let response: LookupResponse = serde_json::from_value(value).unwrap();
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
            outcome: Ok(response),
        })
    }

    pub fn failing(error: LookupError) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            last_query: Mutex::new(None),
            outcome: Err(error),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupClient for MockLookupClient {
    async fn lookup(&self, query: &str) -> Result<LookupResponse, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.to_string());
        self.outcome.clone()
    }
}

pub fn make_message(content: &str) -> Message {
    Message {
        id: "msg_1".to_string(),
        user: User {
            id: 123,
            username: Some("user".to_string()),
            first_name: Some("User".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 456,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    }
}
