//! Outbound lookup call: one POST with a bounded timeout, no retry.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::config::LookupConfig;
use crate::error::LookupError;
use crate::mask_token;
use crate::types::{LookupRequest, LookupResponse};

/// Source of lookup results. The HTTP implementation is [`HttpLookupClient`]; tests substitute their own.
#[async_trait]
pub trait LookupClient: Send + Sync {
    /// Issues exactly one lookup for `query` (trimmed before sending).
    async fn lookup(&self, query: &str) -> Result<LookupResponse, LookupError>;
}

/// reqwest-based client. The underlying connection pool is built once and reused.
#[derive(Debug, Clone)]
pub struct HttpLookupClient {
    client: Client,
    config: LookupConfig,
}

impl HttpLookupClient {
    /// Builds the HTTP client with `config.timeout` applied to the whole request, body included.
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }
}

#[async_trait]
impl LookupClient for HttpLookupClient {
    #[instrument(skip(self, query), fields(query_len = query.chars().count()))]
    async fn lookup(&self, query: &str) -> Result<LookupResponse, LookupError> {
        let request = LookupRequest::new(&self.config, query);

        info!(
            limit = request.limit,
            lang = %request.lang,
            api_token = %mask_token(&request.token),
            timeout_ms = self.config.timeout.as_millis() as u64,
            "step: lookup request"
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let err = LookupError::from(e);
                warn!(error = %err, "Lookup request failed");
                err
            })?;

        let status = response.status();
        let body = response.text().await?;

        // The API reports failures in-band ("Error code"), so any JSON object body is used regardless of status.
        let parsed: LookupResponse = serde_json::from_str(&body).map_err(|e| {
            warn!(status = %status, body_len = body.len(), error = %e, "Lookup response is not a JSON object");
            LookupError::Decode(e.to_string())
        })?;

        info!(
            status = %status,
            body_len = body.len(),
            has_error_code = parsed.error_code.is_some(),
            "step: lookup response"
        );

        Ok(parsed)
    }
}
