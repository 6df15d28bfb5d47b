//! BotConfig: webhook transport + lookup API + report settings. Loaded once at start and never mutated.

use anyhow::Result;
use dbot_telegram::TelegramConfig;
use lookup_client::LookupConfig;
use search_handlers::ReportSettings;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/lookup-bot.log";

/// LOG_FILE, or the default path. Read before the rest of the config so load failures get logged.
pub fn log_file_from_env() -> String {
    env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub lookup: LookupConfig,
    pub report: ReportSettings,
}

impl BotConfig {
    /// Load full config from env; CLI values override their variables.
    /// Call validate() after load to fail fast before anything is bound.
    pub fn load(
        token: Option<String>,
        webhook_url: Option<String>,
        port: Option<u16>,
    ) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token, webhook_url, port)?;
        let lookup = LookupConfig::from_env();
        let report = ReportSettings::from_env()?;
        Ok(Self {
            telegram,
            lookup,
            report,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.lookup.validate()
    }
}
