//! Report composition: one lookup per query, groups rendered in upstream order under a length budget.

use std::env;
use std::sync::Arc;

use anyhow::Result;
use lookup_client::{LookupClient, LookupError, LookupResponse};
use tracing::{debug, info, instrument, warn};

use crate::aliases::GroupAliases;
use crate::format::format_entry;
use crate::messages;

/// Report budget in characters, measured on the composed HTML.
pub const DEFAULT_MAX_REPORT_LEN: usize = 3500;

/// Immutable composition settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    /// REPORT_MAX_LEN
    pub max_len: usize,
    /// GROUP_ALIASES
    pub aliases: GroupAliases,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            max_len: DEFAULT_MAX_REPORT_LEN,
            aliases: GroupAliases::default(),
        }
    }
}

impl ReportSettings {
    /// Load from REPORT_MAX_LEN and GROUP_ALIASES. A malformed alias table is an error.
    pub fn from_env() -> Result<Self> {
        let max_len = env::var("REPORT_MAX_LEN")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|n: &usize| *n > 0)
            .unwrap_or(DEFAULT_MAX_REPORT_LEN);
        let aliases = match env::var("GROUP_ALIASES") {
            Ok(table) => GroupAliases::parse(&table)?,
            Err(_) => GroupAliases::default(),
        };
        Ok(Self { max_len, aliases })
    }
}

/// Accumulated report text with a running char count.
struct ReportText {
    text: String,
    chars: usize,
    max_len: usize,
}

impl ReportText {
    fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            chars: 0,
            max_len,
        }
    }

    fn push(&mut self, s: &str) {
        self.chars += s.chars().count();
        self.text.push_str(s);
    }

    fn over_budget(&self) -> bool {
        self.chars > self.max_len
    }
}

/// Turns a query into chat-ready HTML. Never fails: every failure becomes a reply text.
#[derive(Clone)]
pub struct ReportBuilder {
    client: Arc<dyn LookupClient>,
    settings: ReportSettings,
}

impl ReportBuilder {
    pub fn new(client: Arc<dyn LookupClient>, settings: ReportSettings) -> Self {
        Self { client, settings }
    }

    pub fn settings(&self) -> &ReportSettings {
        &self.settings
    }

    /// Issues one lookup and renders the outcome.
    #[instrument(skip(self, query), fields(query_len = query.chars().count()))]
    pub async fn generate_report(&self, query: &str) -> String {
        match self.client.lookup(query).await {
            Ok(response) => self.build_report(&response),
            Err(LookupError::Timeout) => {
                warn!("Lookup timed out");
                messages::MSG_TIMEOUT.to_string()
            }
            Err(LookupError::Network(description)) => {
                warn!(error = %description, "Lookup network failure");
                messages::network_error(&description)
            }
            Err(LookupError::Decode(reason)) => {
                warn!(error = %reason, "Lookup response unreadable");
                messages::MSG_UNREADABLE.to_string()
            }
        }
    }

    /// Renders a parsed response.
    ///
    /// An error code wins over everything else. Groups are walked in response order; empty and
    /// sentinel groups are skipped. After each entry the budget is checked: once exceeded the
    /// truncation notice is appended and no further entries or groups are rendered.
    pub fn build_report(&self, response: &LookupResponse) -> String {
        if let Some(code) = response.error_code_text() {
            info!(error_code = %code, "Lookup returned error code");
            return messages::upstream_error(&code);
        }

        let Some(groups) = response.groups() else {
            return messages::MSG_NO_DATA.to_string();
        };

        let mut report = ReportText::new(self.settings.max_len);
        let mut results_found = false;
        let mut groups_rendered = 0usize;
        let mut entries_rendered = 0usize;
        let mut truncated = false;

        for group in groups {
            if group.is_empty() || group.is_no_results() {
                debug!(group = %group.name, "Skipping empty group");
                continue;
            }

            results_found = true;
            groups_rendered += 1;
            let title = self.settings.aliases.display_name(group.name);
            report.push(&messages::group_header(title));

            for record in group.records() {
                report.push(&messages::entry_block(&format_entry(record)));
                entries_rendered += 1;

                if report.over_budget() {
                    report.push(messages::TRUNCATION_NOTICE);
                    truncated = true;
                    break;
                }
            }

            if report.over_budget() {
                break;
            }
        }

        if !results_found {
            return messages::MSG_NO_RESULTS.to_string();
        }

        info!(
            groups = groups_rendered,
            entries = entries_rendered,
            report_len = report.chars,
            truncated,
            "step: report built"
        );

        report.text
    }
}
