//! # search-handlers
//!
//! Everything between an inbound query and the reply text: entry formatting, report composition
//! under a length budget, and the `/start` and search handlers for the handler chain.

mod aliases;
mod format;
pub mod messages;
mod report;
mod search_handler;
mod start_handler;

pub use aliases::GroupAliases;
pub use format::{encode_value, format_entry};
pub use report::{ReportBuilder, ReportSettings, DEFAULT_MAX_REPORT_LEN};
pub use search_handler::{is_valid_query, SearchHandler, MIN_QUERY_LEN};
pub use start_handler::StartHandler;
