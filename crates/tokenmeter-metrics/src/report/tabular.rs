//! Tabular (CSV) export
//!
//! Fields containing a separator, quote or line break are quoted per RFC 4180.

use crate::usage::UsageRecord;
use std::borrow::Cow;

/// Text returned instead of a table when the snapshot is empty
pub const NO_TABULAR_DATA: &str = "No data available";

/// Column order of the export
pub const TABULAR_HEADER: [&str; 8] = [
    "timestamp",
    "model",
    "input_tokens",
    "output_tokens",
    "total_tokens",
    "latency_seconds",
    "estimated_cost_usd",
    "finish_reason",
];

const SEPARATOR: &str = ",";

/// Render a history snapshot as comma-separated text
///
/// One header line, then one line per record in history order, joined with
/// `\n` and without a trailing newline.
#[must_use]
pub fn to_tabular(history: &[UsageRecord]) -> String {
    if history.is_empty() {
        return NO_TABULAR_DATA.to_string();
    }

    let mut lines = Vec::with_capacity(history.len() + 1);
    lines.push(TABULAR_HEADER.join(SEPARATOR));

    for record in history {
        let fields = [
            Cow::Owned(record.timestamp_iso()),
            escape_field(&record.model),
            Cow::Owned(record.input_tokens.to_string()),
            Cow::Owned(record.output_tokens.to_string()),
            Cow::Owned(record.total_tokens.to_string()),
            Cow::Owned(format_float(record.latency_seconds)),
            Cow::Owned(format_float(record.estimated_cost)),
            escape_field(&record.finish_reason),
        ];
        lines.push(fields.join(SEPARATOR));
    }

    lines.join("\n")
}

/// Plain decimal notation that keeps a fractional part on whole values (`0.0`, `2.0`)
fn format_float(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

fn escape_field(value: &str) -> Cow<'_, str> {
    if value.contains(&[',', '"', '\n', '\r'][..]) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
