//! Webhook transport config: bot token, public webhook base URL, listen port, optional Bot API server.
//! Loaded from TELEGRAM_BOT_TOKEN (or BOT_TOKEN), WEBHOOK_URL, PORT, TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::Result;
use std::env;
use std::net::{Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 8080;

/// Telegram webhook config. Immutable after load.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Public base URL; the webhook is registered at `<webhook_url>/<bot_token>`.
    pub webhook_url: String,
    pub port: u16,
    pub telegram_api_url: Option<String>,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"***")
            .field("webhook_url", &self.webhook_url)
            .field("port", &self.port)
            .field("telegram_api_url", &self.telegram_api_url)
            .finish()
    }
}

impl TelegramConfig {
    /// Loads from env. Arguments, when given, override the corresponding variable.
    /// Fails if the bot token or webhook URL is missing, or PORT is not a port number.
    pub fn from_env(
        token: Option<String>,
        webhook_url: Option<String>,
        port: Option<u16>,
    ) -> Result<Self> {
        let bot_token = non_empty(token)
            .or_else(|| non_empty(env::var("TELEGRAM_BOT_TOKEN").ok()))
            .or_else(|| non_empty(env::var("BOT_TOKEN").ok()))
            .ok_or_else(|| anyhow::anyhow!("TELEGRAM_BOT_TOKEN is missing"))?;

        let webhook_url = non_empty(webhook_url)
            .or_else(|| non_empty(env::var("WEBHOOK_URL").ok()))
            .ok_or_else(|| anyhow::anyhow!("WEBHOOK_URL is missing"))?
            .trim_end_matches('/')
            .to_string();

        let port = match port {
            Some(p) => p,
            None => match env::var("PORT") {
                Ok(s) => s
                    .trim()
                    .parse()
                    .map_err(|_| anyhow::anyhow!("PORT is not a valid port number: {}", s))?,
                Err(_) => DEFAULT_PORT,
            },
        };

        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            webhook_url,
            port,
            telegram_api_url,
        })
    }

    /// Validate URLs: WEBHOOK_URL must be http(s); TELEGRAM_API_URL must parse if set.
    pub fn validate(&self) -> Result<()> {
        match reqwest::Url::parse(&self.webhook_url) {
            Ok(url) if url.scheme() == "https" || url.scheme() == "http" => {}
            _ => anyhow::bail!("WEBHOOK_URL is not a valid http(s) URL: {}", self.webhook_url),
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    /// Full callback URL registered with Telegram: `<webhook_url>/<bot_token>`.
    pub fn webhook_endpoint(&self) -> String {
        format!("{}/{}", self.webhook_url, self.bot_token)
    }

    /// Listen address: all interfaces on the configured port.
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
