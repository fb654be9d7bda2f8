//! Feature taxonomy, pattern matching, and value normalization.
//!
//! This module is the analytical core of the tool:
//! - The catalog of detectable features ([`taxonomy`], [`FeatureDefinition`])
//! - Heuristic matching of features to driver properties ([`find_match`])
//! - Normalization of raw values into statuses ([`normalize`], [`FeatureStatus`])

mod matcher;
mod normalize;
mod status;
pub mod taxonomy;

pub use matcher::find_match;
pub use normalize::normalize;
pub use status::FeatureStatus;
pub use taxonomy::{FeatureDefinition, POWER_OFF_FEATURE, POWER_OFF_PROPERTY};
