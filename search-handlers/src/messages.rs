//! User-facing reply texts. Everything sent as HTML uses only `<b>`, `<pre>` and `<code>`.

use teloxide::utils::html;

pub const MSG_WELCOME: &str = "👑 <b>Welcome to the Report Generator Bot!</b> 👑\n\n\
This bot is powered by <b>R☉LEX SIR IO ⚜️</b>\n\n\
❓ <b>How to use:</b>\n\
Just send me the <b>Target Query</b> (phone number, email, or username) you want to search for.\n\n\
I will quickly generate the external API report for you.";

pub const MSG_INVALID_QUERY: &str =
    "Please provide a valid query (e.g., phone number or email) to search.";

pub const MSG_TIMEOUT: &str =
    "❌ API Error: Request timed out. The external service took too long to respond.";

pub const MSG_UNREADABLE: &str =
    "❌ API Error: Received an unreadable response from the external service.";

pub const MSG_NO_DATA: &str = "⚠️ No data found in the response.";

pub const MSG_NO_RESULTS: &str = "🔍 Search complete. No results found for your query.";

pub const TRUNCATION_NOTICE: &str =
    "\n... results truncated due to Telegram message length limit.";

/// Acknowledgement sent before the lookup starts.
pub fn searching(query: &str) -> String {
    format!(
        "🔍 Searching for <b>{}</b>... This may take a moment.",
        html::escape(query)
    )
}

pub fn network_error(description: &str) -> String {
    format!(
        "❌ API Error: A network error occurred: {}",
        html::escape(description)
    )
}

pub fn upstream_error(code: &str) -> String {
    format!("🚫 <b>API Error:</b> <code>{}</code>", html::escape(code))
}

pub fn group_header(title: &str) -> String {
    format!("\n\n<b>=== [ DATABASE: {} ] ===</b>\n", html::escape(title))
}

/// Wraps one formatted entry in a preformatted block.
pub fn entry_block(entry: &str) -> String {
    format!("<pre>\n{}\n</pre>", html::escape(entry))
}
