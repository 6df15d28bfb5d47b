//! Lookup API settings. Loaded from env: API_URL, EXTERNAL_API_TOKEN, LOOKUP_LIMIT, LOOKUP_LANG, LOOKUP_TIMEOUT_SECS.

use anyhow::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://leakosintapi.com/";
pub const DEFAULT_LIMIT: u32 = 300;
pub const DEFAULT_LANG: &str = "ru";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Immutable settings for [`crate::HttpLookupClient`].
#[derive(Clone)]
pub struct LookupConfig {
    /// API_URL
    pub api_url: String,
    /// EXTERNAL_API_TOKEN; sent in the body, never logged in clear
    pub api_token: String,
    /// LOOKUP_LIMIT
    pub limit: u32,
    /// LOOKUP_LANG
    pub lang: String,
    /// LOOKUP_TIMEOUT_SECS
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_token: String::new(),
            limit: DEFAULT_LIMIT,
            lang: DEFAULT_LANG.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl std::fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupConfig")
            .field("api_url", &self.api_url)
            .field("api_token", &crate::mask_token(&self.api_token))
            .field("limit", &self.limit)
            .field("lang", &self.lang)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl LookupConfig {
    /// Load from environment variables; unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let api_url = env::var("API_URL").unwrap_or(defaults.api_url);
        let api_token = env::var("EXTERNAL_API_TOKEN").unwrap_or(defaults.api_token);
        let limit = env::var("LOOKUP_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.limit);
        let lang = env::var("LOOKUP_LANG")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.lang);
        let timeout = env::var("LOOKUP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|secs: &u64| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.timeout);

        Self {
            api_url,
            api_token,
            limit,
            lang,
            timeout,
        }
    }

    /// Validate config: API_URL must be a valid URL.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.api_url).is_err() {
            anyhow::bail!("API_URL is not a valid URL: {}", self.api_url);
        }
        Ok(())
    }
}
