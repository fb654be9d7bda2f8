//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Inventory tuning section
    #[serde(default)]
    pub inspect: InspectSection,

    /// Report output section
    #[serde(default)]
    pub output: OutputSection,

    /// Adapter filter configuration for all-adapters mode
    #[serde(default)]
    pub filter: FilterSection,

    /// Feature taxonomy extension
    #[serde(default)]
    pub taxonomy: TaxonomySection,
}

/// Inventory tuning section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InspectSection {
    /// Maximum number of adapters inspected concurrently
    pub concurrency: Option<usize>,

    /// Overall time budget in seconds for the whole inventory
    pub timeout: Option<u64>,
}

/// Report output section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "table", "csv", or "json"
    pub format: Option<String>,
}

/// Adapter filter configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterSection {
    /// Regex patterns for adapters to include
    #[serde(default)]
    pub include: Vec<String>,

    /// Regex patterns for adapters to exclude
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Exclude virtual adapters
    #[serde(default)]
    pub exclude_virtual: bool,
}

/// Feature taxonomy extension section.
///
/// Features listed here are appended to the built-in taxonomy, keeping
/// detection data-driven: new driver properties need a config entry, not
/// a code change.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonomySection {
    /// User-defined features
    #[serde(default)]
    pub feature: Vec<FeatureEntry>,
}

/// One user-defined feature.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureEntry {
    /// Canonical feature name used in report rows
    pub name: String,

    /// Display-name patterns, most specific first
    pub patterns: Vec<String>,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# nicpower Configuration File
# Documentation: https://github.com/doraemonkeys/nicpower

[inspect]
# Maximum number of adapters inspected concurrently (default: 4)
concurrency = 4

# Overall time budget in seconds for the whole inventory
# timeout = 30

[output]
# Output format: "table", "csv", or "json" (default: table)
format = "table"

[filter]
# Regex patterns for adapters to include in all-adapters mode (empty = all)
# Note: CLI patterns REPLACE these entirely (not merged)
# include = ["^Ethernet", "^Wi-Fi"]

# Regex patterns for adapters to exclude in all-adapters mode
# Note: CLI patterns REPLACE these entirely (not merged)
# exclude = ["^Docker", "^vEthernet"]

# Exclude virtual adapters (VMware, VirtualBox, Hyper-V, etc.)
exclude_virtual = false

# Additional features appended to the built-in taxonomy.
# Patterns are case-insensitive substrings, most specific first.
# [[taxonomy.feature]]
# name = "Selective Suspend"
# patterns = ["Selective Suspend"]
"#
    .to_string()
}

#[cfg(test)]
#[path = "toml_tests.rs"]
mod tests;
