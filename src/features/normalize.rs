//! Normalization of raw property values into feature statuses.

use crate::network::PropertyValue;

use super::FeatureStatus;

/// Converts a raw property value into a canonical status.
///
/// Drivers encode on/off as `0`/`1` in whatever type they please: an
/// integer, a numeric string, or a string list whose first element is the
/// effective value. Anything else becomes [`FeatureStatus::Unparseable`]
/// carrying the verbatim rendering from [`PropertyValue::describe`].
///
/// Pure and total: every input maps to a status.
#[must_use]
pub fn normalize(value: &PropertyValue) -> FeatureStatus {
    let parsed = match value {
        PropertyValue::Int(n) => flag_from_int(*n),
        PropertyValue::Text(s) => flag_from_text(s),
        // Only the first element is inspected; drivers that report multiple
        // elements put the effective value first.
        PropertyValue::TextList(items) => items.first().and_then(|s| flag_from_text(s)),
        PropertyValue::Opaque { .. } => None,
    };

    parsed.map_or_else(
        || FeatureStatus::Unparseable(value.describe()),
        FeatureStatus::from_flag,
    )
}

/// Interprets 0/1 as a flag; any other integer is unparseable.
const fn flag_from_int(n: i64) -> Option<bool> {
    match n {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

/// Interprets a string holding integer 0/1 as a flag.
fn flag_from_text(s: &str) -> Option<bool> {
    s.trim().parse::<i64>().ok().and_then(flag_from_int)
}
