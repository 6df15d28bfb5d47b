//! Entry formatting: one record → indented `name: <json>` lines.

use std::io;

use lookup_client::Record;
use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;

/// Renders one record as `"  <field>: <json value>"` lines joined by `\n`, in record order.
///
/// Strings are quoted and JSON-escaped, non-ASCII text is kept as is, and nested values are
/// written with `", "` / `": "` separators. Never fails for a parsed JSON value.
pub fn format_entry(record: &Record) -> String {
    record
        .iter()
        .map(|(field, value)| format!("  {}: {}", field, encode_value(value)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// JSON-encodes a value on a single line with a space after each `,` and `:`.
pub fn encode_value(value: &Value) -> String {
    let mut out = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut out, SpacedFormatter);
    if value.serialize(&mut serializer).is_err() {
        return value.to_string();
    }
    String::from_utf8(out).unwrap_or_else(|_| value.to_string())
}

/// Compact formatter with `", "` between items and `": "` after keys.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}
