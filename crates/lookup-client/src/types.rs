//! Wire types: request body and response shape of the lookup API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::LookupConfig;

/// Group key the API uses to say nothing matched.
pub const NO_RESULTS_GROUP: &str = "No results found";

/// One matched record: field name → JSON value, in upstream order.
pub type Record = Map<String, Value>;

/// JSON body of the single POST. Built fresh per query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupRequest {
    pub token: String,
    pub request: String,
    pub limit: u32,
    pub lang: String,
}

impl LookupRequest {
    /// Builds the body from the trimmed query and the fixed settings.
    pub fn new(config: &LookupConfig, query: &str) -> Self {
        Self {
            token: config.api_token.clone(),
            request: query.trim().to_string(),
            limit: config.limit,
            lang: config.lang.clone(),
        }
    }
}

const ERROR_CODE_KEY: &str = "Error code";
const LIST_KEY: &str = "List";

/// Parsed response: `{"List": {<group>: {"Data": [...]}}}` or `{"Error code": ...}`.
///
/// Only a JSON object deserializes; any other top-level value is a decode error.
/// A `null` under either key counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct LookupResponse {
    pub error_code: Option<Value>,
    pub list: Option<Value>,
}

impl From<Map<String, Value>> for LookupResponse {
    fn from(mut body: Map<String, Value>) -> Self {
        let mut take = |key: &str| body.remove(key).filter(|v| !v.is_null());
        Self {
            error_code: take(ERROR_CODE_KEY),
            list: take(LIST_KEY),
        }
    }
}

impl LookupResponse {
    /// Upstream error code formatted for display: strings verbatim, anything else as JSON.
    pub fn error_code_text(&self) -> Option<String> {
        self.error_code.as_ref().map(|code| match code {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Result groups in upstream order, or None when "List" is absent, empty or not an object.
    pub fn groups(&self) -> Option<impl Iterator<Item = Group<'_>>> {
        let list = self.list.as_ref()?.as_object()?;
        if list.is_empty() {
            return None;
        }
        Some(list.iter().map(|(name, content)| Group {
            name: name.as_str(),
            content,
        }))
    }
}

/// A named bucket of records as returned by the API.
#[derive(Debug, Clone, Copy)]
pub struct Group<'a> {
    pub name: &'a str,
    pub content: &'a Value,
}

impl<'a> Group<'a> {
    /// True for the sentinel "no results" group.
    pub fn is_no_results(&self) -> bool {
        self.name == NO_RESULTS_GROUP
    }

    /// JSON falsiness of the content: null, false, 0, "", [] and {} are empty.
    pub fn is_empty(&self) -> bool {
        match self.content {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(a) => a.is_empty(),
            Value::Object(o) => o.is_empty(),
        }
    }

    /// Records under "Data", in order. Entries that are not JSON objects are skipped.
    pub fn records(&self) -> impl Iterator<Item = &'a Record> {
        self.content
            .get("Data")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }
}
