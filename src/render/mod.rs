//! Presenters consuming the assembled report.
//!
//! The core hands a sorted `Vec<ReportRow>` to exactly one of these thin
//! renderers; none of them reorder, filter, or otherwise interpret rows.

mod csv;
mod json;
mod table;

use thiserror::Error;

use crate::inventory::ReportRow;

pub use csv::render as render_csv;
pub use json::render as render_json;
pub use table::render as render_table;

/// Output format selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    #[default]
    Table,
    /// Comma-separated values with a header line.
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

impl OutputFormat {
    /// Parses a format name as used in configuration files.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "table" => Some(Self::Table),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => f.write_str("table"),
            Self::Csv => f.write_str("csv"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Error type for rendering failures.
#[derive(Debug, Error)]
pub enum RenderError {
    /// JSON serialization failed.
    #[error("Failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Renders the report in the requested format.
///
/// # Errors
///
/// Returns [`RenderError`] only for JSON serialization failures; the text
/// formats are infallible.
pub fn render(format: OutputFormat, rows: &[ReportRow]) -> Result<String, RenderError> {
    match format {
        OutputFormat::Table => Ok(table::render(rows)),
        OutputFormat::Csv => Ok(csv::render(rows)),
        OutputFormat::Json => Ok(json::render(rows)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_known_formats_case_insensitively() {
        assert_eq!(OutputFormat::from_name("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_name("CSV"), Some(OutputFormat::Csv));
        assert_eq!(OutputFormat::from_name("Json"), Some(OutputFormat::Json));
    }

    #[test]
    fn from_name_rejects_unknown_formats() {
        assert_eq!(OutputFormat::from_name("yaml"), None);
    }

    #[test]
    fn render_dispatches_on_format() {
        let rows = Vec::new();

        assert!(render(OutputFormat::Table, &rows).is_ok());
        assert!(render(OutputFormat::Csv, &rows).is_ok());
        assert_eq!(render(OutputFormat::Json, &rows).unwrap(), "[]");
    }
}
