//! Pattern matching of taxonomy features against driver property names.

use crate::network::AdapterProperty;

use super::FeatureDefinition;

/// Finds the property backing `feature` among `properties`, if any.
///
/// Patterns are tried in declared order; for each pattern the FIRST property
/// whose display name contains it case-insensitively wins, and the search
/// stops at the first pattern with any match. Substring ("contains")
/// semantics tolerate driver-specific decorations like a "V2" suffix.
///
/// Returns `None` when no pattern matches any property - the feature is
/// simply unsupported on this adapter, which is not an error.
#[must_use]
pub fn find_match<'a>(
    feature: &FeatureDefinition,
    properties: &'a [AdapterProperty],
) -> Option<&'a AdapterProperty> {
    for pattern in &feature.patterns {
        let needle = pattern.to_lowercase();
        let hit = properties
            .iter()
            .find(|property| property.display_name.to_lowercase().contains(&needle));
        if hit.is_some() {
            return hit;
        }
    }
    None
}
