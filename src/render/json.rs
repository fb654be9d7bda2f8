//! Pretty-printed JSON output.

use crate::inventory::ReportRow;

/// Renders rows as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn render(rows: &[ReportRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}
