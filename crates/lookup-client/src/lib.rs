//! # lookup-client
//!
//! Client for the external lookup API. One POST per query with a JSON body
//! `{token, request, limit, lang}` and a bounded timeout; no retry.
//!
//! The response is kept close to the wire: groups and records stay as `serde_json` values
//! in upstream order so that report composition is deterministic for a given body.

mod client;
mod config;
mod error;
mod types;

pub use client::{HttpLookupClient, LookupClient};
pub use config::LookupConfig;
pub use error::LookupError;
pub use types::{Group, LookupRequest, LookupResponse, Record, NO_RESULTS_GROUP};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11 (in chars), returns "***" so no part of a short token leaks.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();
    if len <= 11 {
        "***".to_string()
    } else {
        let head: String = chars[..7].iter().collect();
        let tail: String = chars[len - 4..].iter().collect();
        format!("{}***{}", head, tail)
    }
}
