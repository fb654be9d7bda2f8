//! Aligned plain-text table output.

use crate::inventory::ReportRow;

const HEADERS: [&str; 5] = ["Adapter", "Feature", "Status", "Property", "Value"];

/// Renders rows as an aligned text table with a header rule.
///
/// Returns a short notice instead of an empty table when there are no rows.
#[must_use]
pub fn render(rows: &[ReportRow]) -> String {
    if rows.is_empty() {
        return "No adapters produced any report rows.\n".to_string();
    }

    let cells: Vec<[String; 5]> = rows.iter().map(row_cells).collect();

    // Column widths from content and headers.
    let mut widths: [usize; 5] = HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn row_cells(row: &ReportRow) -> [String; 5] {
    [
        row.adapter_name.clone(),
        row.feature.clone(),
        row.status.to_string(),
        row.property_label().to_string(),
        row.raw_label(),
    ]
}

fn push_line(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
