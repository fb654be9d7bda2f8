//! CSV output with RFC-4180-style quoting.

use crate::inventory::ReportRow;

const HEADER: &str = "adapter,description,feature,status,property,value";

/// Renders rows as CSV with a header line.
#[must_use]
pub fn render(rows: &[ReportRow]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for row in rows {
        let fields = [
            row.adapter_name.as_str(),
            row.adapter_description.as_str(),
            row.feature.as_str(),
            &row.status.to_string(),
            row.property_label(),
            &row.raw_label(),
        ]
        .map(escape);
        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}

/// Quotes a field when it contains a comma, quote, or line break.
fn escape(field: &str) -> String {
    if field.contains(['"', ',', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
