use thiserror::Error;

/// Failure of the single outbound lookup call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The call exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Connection, TLS or protocol failure. Carries a description without the request URL.
    #[error("network error: {0}")]
    Network(String),

    /// The body was not a JSON object.
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return LookupError::Timeout;
        }
        if e.is_decode() {
            return LookupError::Decode(e.without_url().to_string());
        }
        LookupError::Network(describe(&e.without_url()))
    }
}

/// Joins an error and its sources with ": ", skipping repeats.
fn describe(e: &(dyn std::error::Error + 'static)) -> String {
    let mut parts: Vec<String> = vec![e.to_string()];
    let mut source = e.source();
    while let Some(inner) = source {
        let text = inner.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = inner.source();
    }
    parts.join(": ")
}
