//! Core network types for adapter and property representation.

use std::fmt;

use serde::Serialize;

/// Network adapter type classification.
///
/// Used for logging, filtering, and debugging. The core logic does not
/// depend on specific values, allowing platform-specific implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AdapterKind {
    /// Physical Ethernet adapter.
    Ethernet,
    /// Wireless (Wi-Fi) adapter.
    Wireless,
    /// Loopback adapter (localhost).
    Loopback,
    /// Virtual adapter (`VMware`, `VirtualBox`, `Hyper-V`, WSL, etc.).
    Virtual,
    /// Unknown or other adapter type, preserving the original type code for debugging.
    Other(u32),
}

impl AdapterKind {
    /// Returns true if this is a virtual adapter.
    #[must_use]
    pub const fn is_virtual(&self) -> bool {
        matches!(self, Self::Virtual)
    }

    /// Returns true if this is a loopback adapter.
    #[must_use]
    pub const fn is_loopback(&self) -> bool {
        matches!(self, Self::Loopback)
    }
}

/// Identity of a single network adapter as reported by the platform.
///
/// The `id` field is the platform's stable interface identifier (the
/// `NetCfgInstanceId` GUID on Windows) and is what the property providers
/// use to locate driver state; `name` is the human-facing friendly name
/// used for resolution and reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterInfo {
    /// The friendly name of the adapter (e.g., "Ethernet", "Wi-Fi").
    pub name: String,
    /// The driver-reported description (e.g., "Intel(R) Ethernet Connection I219-V").
    pub description: String,
    /// Platform-specific stable identifier for the adapter.
    pub id: String,
    /// The type of adapter.
    pub kind: AdapterKind,
}

impl AdapterInfo {
    /// Creates a new adapter identity.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        id: impl Into<String>,
        kind: AdapterKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            id: id.into(),
            kind,
        }
    }
}

/// The single boolean power-management setting of an adapter.
///
/// Controls whether the operating system may power off the device to save
/// power (the "Allow the computer to turn off this device" checkbox).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerManagement {
    /// Whether the OS is permitted to power the device off.
    pub allow_power_off: bool,
}

/// A raw advanced-property value as exposed by the driver.
///
/// Drivers report these values with no uniform type: the same logical
/// setting may surface as an integer, a string, a list of strings, or
/// something else entirely. Modeled as an explicit tagged union so that
/// normalization matches on the variant, never on runtime type probing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// An integer value (e.g., a `REG_DWORD`).
    Int(i64),
    /// A single string value.
    Text(String),
    /// An ordered list of strings (e.g., a `REG_MULTI_SZ`).
    TextList(Vec<String>),
    /// Any other value, preserved as its rendered form plus the name of
    /// its underlying type.
    Opaque {
        /// Textual rendering of the original value.
        rendered: String,
        /// Name of the value's underlying type (e.g., "REG_BINARY").
        type_name: String,
    },
}

impl PropertyValue {
    /// Returns the runtime type name of this value.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Int(_) => "integer",
            Self::Text(_) => "string",
            Self::TextList(_) => "string[]",
            Self::Opaque { type_name, .. } => type_name,
        }
    }

    /// Renders the value verbatim followed by its type name in parentheses.
    ///
    /// Lists are rendered comma-joined and brace-delimited; scalars render
    /// plainly. This exact format is a user-facing diagnostic contract for
    /// values that cannot be normalized.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} ({})", self, self.type_name())
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
            Self::TextList(items) => write!(f, "{{{}}}", items.join(", ")),
            Self::Opaque { rendered, .. } => f.write_str(rendered),
        }
    }
}

/// A single driver-exposed advanced property of an adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterProperty {
    /// Human-readable display name as registered by the driver
    /// (e.g., "Energy Efficient Ethernet").
    pub display_name: String,
    /// The raw property value.
    pub value: PropertyValue,
}

impl AdapterProperty {
    /// Creates a new adapter property.
    #[must_use]
    pub fn new(display_name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            display_name: display_name.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod adapter_kind {
        use super::*;

        #[test]
        fn virtual_is_virtual() {
            assert!(AdapterKind::Virtual.is_virtual());
            assert!(!AdapterKind::Ethernet.is_virtual());
            assert!(!AdapterKind::Other(999).is_virtual());
        }

        #[test]
        fn loopback_is_loopback() {
            assert!(AdapterKind::Loopback.is_loopback());
            assert!(!AdapterKind::Wireless.is_loopback());
        }

        #[test]
        fn other_preserves_type_code() {
            assert_eq!(AdapterKind::Other(42), AdapterKind::Other(42));
            assert_ne!(AdapterKind::Other(42), AdapterKind::Other(99));
        }
    }

    mod adapter_info {
        use super::*;

        #[test]
        fn new_creates_info_with_correct_fields() {
            let info = AdapterInfo::new(
                "Ethernet0",
                "Intel(R) Ethernet Connection",
                "{guid}",
                AdapterKind::Ethernet,
            );

            assert_eq!(info.name, "Ethernet0");
            assert_eq!(info.description, "Intel(R) Ethernet Connection");
            assert_eq!(info.id, "{guid}");
            assert_eq!(info.kind, AdapterKind::Ethernet);
        }
    }

    mod property_value {
        use super::*;

        #[test]
        fn int_displays_plainly() {
            assert_eq!(PropertyValue::Int(1).to_string(), "1");
        }

        #[test]
        fn text_displays_verbatim() {
            assert_eq!(PropertyValue::Text("maybe".into()).to_string(), "maybe");
        }

        #[test]
        fn list_displays_brace_delimited() {
            let value = PropertyValue::TextList(vec!["0".into(), "1".into()]);
            assert_eq!(value.to_string(), "{0, 1}");
        }

        #[test]
        fn empty_list_displays_empty_braces() {
            assert_eq!(PropertyValue::TextList(vec![]).to_string(), "{}");
        }

        #[test]
        fn type_names_follow_variant() {
            assert_eq!(PropertyValue::Int(0).type_name(), "integer");
            assert_eq!(PropertyValue::Text(String::new()).type_name(), "string");
            assert_eq!(PropertyValue::TextList(vec![]).type_name(), "string[]");
            assert_eq!(
                PropertyValue::Opaque {
                    rendered: "00 ff".into(),
                    type_name: "REG_BINARY".into(),
                }
                .type_name(),
                "REG_BINARY"
            );
        }

        #[test]
        fn describe_appends_type_name() {
            assert_eq!(
                PropertyValue::Text("maybe".into()).describe(),
                "maybe (string)"
            );
            assert_eq!(
                PropertyValue::TextList(vec!["a".into(), "b".into()]).describe(),
                "{a, b} (string[])"
            );
        }
    }
}
