//! The canonical status a feature resolves to.

use std::fmt;

use serde::{Serialize, Serializer};

/// Normalized state of one power-saving feature on one adapter.
///
/// Always derived, never input directly: the normalizer produces
/// `Enabled`/`Disabled`/`Unparseable`, the matcher's miss produces
/// `NotSupported`, and a failed provider query produces `ErrorRetrieving`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureStatus {
    /// The feature is configured on.
    Enabled,
    /// The feature is configured off.
    Disabled,
    /// No matching property exists on this adapter.
    NotSupported,
    /// The provider query for this feature's data failed.
    ErrorRetrieving,
    /// A matching property exists but its value fits no known encoding.
    /// Carries the verbatim rendering of the value plus its type name.
    Unparseable(String),
}

impl FeatureStatus {
    /// Maps a boolean flag to `Enabled`/`Disabled`.
    #[must_use]
    pub const fn from_flag(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

impl fmt::Display for FeatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enabled => f.write_str("Enabled"),
            Self::Disabled => f.write_str("Disabled"),
            Self::NotSupported => f.write_str("Not Supported"),
            Self::ErrorRetrieving => f.write_str("Error Retrieving"),
            Self::Unparseable(rendered) => write!(f, "Unparseable: {rendered}"),
        }
    }
}

impl Serialize for FeatureStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
