//! Per-adapter inspection: the four-stage pipeline producing report rows.

use std::sync::Arc;

use crate::features::{
    self, FeatureDefinition, FeatureStatus, POWER_OFF_FEATURE, POWER_OFF_PROPERTY,
};
use crate::network::{
    AdapterEnumerator, AdapterInfo, AdapterProperty, AdvancedPropertyProvider,
    PowerManagementProvider, PropertyValue,
};

use super::ReportRow;

/// Inspects adapters and produces one report row per (adapter, feature).
///
/// Four stages run per adapter, each independently fault-isolated:
///
/// 1. **Resolve** the identifier. Failure skips the adapter entirely - the
///    only stage whose failure is fatal to the adapter.
/// 2. **Power-management row**: a failed query degrades to an
///    `ErrorRetrieving` row, never an omission.
/// 3. **Advanced-property retrieval**: a failed query degrades to an empty
///    property list, making stage 4 report everything as unsupported.
/// 4. **Per-feature rows** in taxonomy order, via the matcher and
///    normalizer.
///
/// No error escapes: every failure becomes a row or a `tracing` diagnostic.
/// The inspector never mutates adapter state.
pub struct Inspector {
    enumerator: Arc<dyn AdapterEnumerator>,
    power: Arc<dyn PowerManagementProvider>,
    advanced: Arc<dyn AdvancedPropertyProvider>,
    taxonomy: Vec<FeatureDefinition>,
}

impl Inspector {
    /// Creates an inspector over the given providers and feature taxonomy.
    #[must_use]
    pub fn new(
        enumerator: Arc<dyn AdapterEnumerator>,
        power: Arc<dyn PowerManagementProvider>,
        advanced: Arc<dyn AdvancedPropertyProvider>,
        taxonomy: Vec<FeatureDefinition>,
    ) -> Self {
        Self {
            enumerator,
            power,
            advanced,
            taxonomy,
        }
    }

    /// The enumerator this inspector resolves adapters through.
    #[must_use]
    pub fn enumerator(&self) -> &Arc<dyn AdapterEnumerator> {
        &self.enumerator
    }

    /// The feature taxonomy rows are produced for.
    #[must_use]
    pub fn taxonomy(&self) -> &[FeatureDefinition] {
        &self.taxonomy
    }

    /// Inspects one adapter by identifier.
    ///
    /// Returns `1 + taxonomy.len()` rows for a resolvable adapter and zero
    /// rows when resolution fails (with a diagnostic).
    #[must_use]
    pub fn inspect(&self, identifier: &str) -> Vec<ReportRow> {
        match self.enumerator.resolve(identifier) {
            Ok(adapter) => self.inspect_resolved(&adapter),
            Err(error) => {
                tracing::warn!(adapter = identifier, %error, "skipping unresolvable adapter");
                Vec::new()
            }
        }
    }

    /// Inspects an already-resolved adapter (stages 2-4).
    #[must_use]
    pub fn inspect_resolved(&self, adapter: &AdapterInfo) -> Vec<ReportRow> {
        tracing::debug!(adapter = %adapter.name, "inspecting adapter");

        let mut rows = Vec::with_capacity(1 + self.taxonomy.len());
        rows.push(self.power_row(adapter));

        let properties = self.advanced_properties(adapter);
        for feature in &self.taxonomy {
            rows.push(Self::feature_row(adapter, feature, &properties));
        }

        rows
    }

    /// Stage 2: the power-management pseudo-feature row.
    fn power_row(&self, adapter: &AdapterInfo) -> ReportRow {
        let (status, raw_value) = match self.power.get(adapter) {
            Ok(settings) => (
                FeatureStatus::from_flag(settings.allow_power_off),
                Some(PropertyValue::Int(i64::from(settings.allow_power_off))),
            ),
            Err(error) => {
                tracing::warn!(
                    adapter = %adapter.name,
                    %error,
                    "failed to read power-management setting"
                );
                (FeatureStatus::ErrorRetrieving, None)
            }
        };

        ReportRow {
            adapter_name: adapter.name.clone(),
            adapter_description: adapter.description.clone(),
            feature: POWER_OFF_FEATURE.into(),
            status,
            matched_property: Some(POWER_OFF_PROPERTY.into()),
            raw_value,
        }
    }

    /// Stage 3: the advanced-property list, degraded to empty on failure.
    ///
    /// An empty list is indistinguishable from the features being absent,
    /// so stage 4 reports "Not Supported" rather than an error.
    fn advanced_properties(&self, adapter: &AdapterInfo) -> Vec<AdapterProperty> {
        match self.advanced.list(adapter) {
            Ok(properties) => properties,
            Err(error) => {
                tracing::warn!(
                    adapter = %adapter.name,
                    %error,
                    "failed to list advanced properties; treating as none"
                );
                Vec::new()
            }
        }
    }

    /// Stage 4: one row for one taxonomy feature.
    fn feature_row(
        adapter: &AdapterInfo,
        feature: &FeatureDefinition,
        properties: &[AdapterProperty],
    ) -> ReportRow {
        let matched = features::find_match(feature, properties);

        let (status, matched_property, raw_value) = match matched {
            Some(property) => (
                features::normalize(&property.value),
                Some(property.display_name.clone()),
                Some(property.value.clone()),
            ),
            None => (FeatureStatus::NotSupported, None, None),
        };

        ReportRow {
            adapter_name: adapter.name.clone(),
            adapter_description: adapter.description.clone(),
            feature: feature.name.clone(),
            status,
            matched_property,
            raw_value,
        }
    }
}

#[cfg(test)]
#[path = "inspector_tests.rs"]
mod tests;
