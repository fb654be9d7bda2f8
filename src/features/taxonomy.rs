//! The catalog of power-saving features this tool knows how to detect.
//!
//! Kept as a declarative table (feature → ordered pattern list) so the
//! taxonomy can be extended - from configuration or future built-ins -
//! without touching the matcher.

use serde::Serialize;

/// Display name of the power-management pseudo-feature reported for every
/// adapter alongside the taxonomy features.
pub const POWER_OFF_FEATURE: &str = "Allow the computer to turn off this device to save power";

/// Underlying property name reported for the power-management row.
pub const POWER_OFF_PROPERTY: &str = "AllowComputerToTurnOffDevice";

/// One detectable power-saving feature.
///
/// `patterns` are case-insensitive substring patterns matched against
/// driver-reported property display names, in declared order; the order is
/// the tie-break when several patterns could match (first declared wins).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureDefinition {
    /// Canonical feature name used in report rows.
    pub name: String,
    /// Acceptable display-name patterns, most specific first.
    pub patterns: Vec<String>,
}

impl FeatureDefinition {
    /// Creates a feature definition.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }
}

/// Returns the built-in feature taxonomy.
///
/// Patterns are substrings rather than exact names because drivers decorate
/// them freely ("Energy Efficient Ethernet V2", "Green Ethernet (Gigabit)").
#[must_use]
pub fn builtin() -> Vec<FeatureDefinition> {
    vec![
        FeatureDefinition::new(
            "Energy Efficient Ethernet",
            ["Energy Efficient Ethernet", "Energy-Efficient Ethernet", "EEE"],
        ),
        FeatureDefinition::new("Advanced EEE", ["Advanced EEE"]),
        FeatureDefinition::new("Green Ethernet", ["Green Ethernet"]),
        FeatureDefinition::new("Power Saving Mode", ["Power Saving Mode"]),
        FeatureDefinition::new("Gigabit Lite", ["Gigabit Lite"]),
        FeatureDefinition::new("Ultra Low Power Mode", ["Ultra Low Power Mode", "ULP"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_six_features() {
        assert_eq!(builtin().len(), 6);
    }

    #[test]
    fn builtin_names_are_unique() {
        let features = builtin();
        let mut names: Vec<&str> = features.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();

        assert_eq!(names.len(), features.len());
    }

    #[test]
    fn every_feature_has_at_least_one_pattern() {
        for feature in builtin() {
            assert!(!feature.patterns.is_empty(), "no patterns: {}", feature.name);
        }
    }

    #[test]
    fn specific_patterns_precede_loose_ones() {
        let features = builtin();
        let eee = features
            .iter()
            .find(|f| f.name == "Energy Efficient Ethernet")
            .unwrap();

        // "EEE" is the loose fallback and must come after the full names.
        assert_eq!(eee.patterns.last().map(String::as_str), Some("EEE"));
    }
}
