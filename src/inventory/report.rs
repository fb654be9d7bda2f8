//! Report rows and the assembler that orders them.

use serde::Serialize;

use crate::features::FeatureStatus;
use crate::network::PropertyValue;

/// One (adapter, feature) observation.
///
/// Produced fresh by the inspector and never mutated afterwards; ownership
/// moves to the assembler. Exactly one row exists per (adapter, feature)
/// pair for every successfully resolved adapter, failures included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Friendly adapter name.
    pub adapter_name: String,
    /// Driver-reported adapter description.
    pub adapter_description: String,
    /// Canonical feature name.
    pub feature: String,
    /// Normalized feature status.
    pub status: FeatureStatus,
    /// Display name of the property the status was derived from;
    /// `None` when no property matched.
    pub matched_property: Option<String>,
    /// The original raw value, when one was retrieved.
    pub raw_value: Option<PropertyValue>,
}

impl ReportRow {
    /// The matched property name as presented to users.
    #[must_use]
    pub fn property_label(&self) -> &str {
        self.matched_property.as_deref().unwrap_or("Not Found")
    }

    /// The raw value as presented to users (empty string when absent).
    #[must_use]
    pub fn raw_label(&self) -> String {
        self.raw_value
            .as_ref()
            .map(ToString::to_string)
            .unwrap_or_default()
    }
}

/// Concatenates per-adapter row groups and imposes the total output order:
/// primarily by adapter name, secondarily by feature name, both as plain
/// ordinal (byte-wise) comparisons so the order is deterministic and
/// locale-insensitive. The sort is stable.
#[must_use]
pub fn assemble(groups: Vec<Vec<ReportRow>>) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = groups.into_iter().flatten().collect();
    rows.sort_by(|a, b| {
        a.adapter_name
            .cmp(&b.adapter_name)
            .then_with(|| a.feature.cmp(&b.feature))
    });
    rows
}
