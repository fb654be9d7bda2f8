//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

use crate::features::{FeatureDefinition, taxonomy};
use crate::inventory::{GatherOptions, Selection};
use crate::network::AdapterKind;
use crate::network::filter::{FilterChain, KindFilter, NameRegexFilter};
use crate::render::OutputFormat;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::{FeatureEntry, TomlConfig, default_config_template};

/// Fully validated configuration ready for use by the application.
///
/// This struct represents a complete, validated configuration where all
/// values have been merged (CLI over TOML over defaults) and validated.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] to resolve the config file and merge it
/// with CLI arguments, or [`ValidatedConfig::from_raw`] when the TOML
/// source is already in hand.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Which adapters to inspect (explicit; "all" resolved here, never in the core)
    pub selection: Selection,

    /// Report output format
    pub format: OutputFormat,

    /// Adapter filter for all-adapters mode
    pub filter: FilterChain,

    /// Maximum number of adapters inspected concurrently
    pub concurrency: NonZeroUsize,

    /// Overall time budget for the whole inventory
    pub deadline: Option<Duration>,

    /// Feature taxonomy (built-ins plus configured extensions)
    pub taxonomy: Vec<FeatureDefinition>,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let selection = match &self.selection {
            Selection::All => "all".to_string(),
            Selection::Named(names) => format!("{} named", names.len()),
        };
        let deadline = self
            .deadline
            .map_or_else(|| "none".to_string(), |d| format!("{}s", d.as_secs()));

        write!(
            f,
            "Config {{ adapters: {selection}, format: {}, concurrency: {}, timeout: {deadline}, \
             filters: {}, features: {}, verbose: {} }}",
            self.format,
            self.concurrency,
            self.filter.len(),
            self.taxonomy.len(),
            self.verbose,
        )
    }
}

impl ValidatedConfig {
    /// Loads and validates configuration for the given CLI arguments.
    ///
    /// An explicitly passed `--config` path must exist; the default path
    /// under the user config directory is used only when present.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed, or if
    /// any merged value fails validation.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = Self::locate_toml(cli)?;
        Self::from_raw(cli, toml.as_ref())
    }

    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values. Filter
    /// patterns use replace semantics (CLI patterns replace TOML patterns
    /// entirely); boolean flags use OR semantics.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Regex patterns are invalid
    /// - The output format name is unknown
    /// - Concurrency is zero or the timeout is zero
    /// - A user-defined taxonomy feature is malformed or duplicates a name
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let selection = if cli.adapters.is_empty() {
            Selection::All
        } else {
            Selection::Named(cli.adapters.clone())
        };

        Ok(Self {
            selection,
            format: Self::resolve_format(cli, toml)?,
            filter: Self::build_filter(cli, toml)?,
            concurrency: Self::resolve_concurrency(cli, toml)?,
            deadline: Self::resolve_deadline(cli, toml)?,
            taxonomy: Self::build_taxonomy(toml)?,
            verbose: cli.verbose,
        })
    }

    /// The gather tuning implied by this configuration.
    #[must_use]
    pub const fn gather_options(&self) -> GatherOptions {
        GatherOptions {
            concurrency: self.concurrency,
            deadline: self.deadline,
        }
    }

    fn locate_toml(cli: &Cli) -> Result<Option<TomlConfig>, ConfigError> {
        if let Some(path) = &cli.config {
            return Ok(Some(TomlConfig::load(path)?));
        }
        match defaults::config_path() {
            Some(path) if path.exists() => Ok(Some(TomlConfig::load(&path)?)),
            _ => Ok(None),
        }
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        if let Some(arg) = cli.format {
            return Ok(arg.into());
        }
        match toml.and_then(|t| t.output.format.as_deref()) {
            Some(name) => OutputFormat::from_name(name).ok_or_else(|| ConfigError::InvalidFormat {
                value: name.to_string(),
            }),
            None => Ok(OutputFormat::default()),
        }
    }

    /// Builds the all-adapters filter chain.
    ///
    /// CLI patterns **replace** TOML patterns entirely (not merged), and
    /// include/exclude are handled independently. `exclude_virtual` uses OR
    /// semantics: once enabled in TOML, CLI cannot disable it.
    fn build_filter(cli: &Cli, toml: Option<&TomlConfig>) -> Result<FilterChain, ConfigError> {
        let empty: &[String] = &[];
        let toml_includes = toml.map_or(empty, |t| &t.filter.include);
        let toml_excludes = toml.map_or(empty, |t| &t.filter.exclude);

        let includes = if cli.include.is_empty() { toml_includes } else { &cli.include };
        let excludes = if cli.exclude.is_empty() { toml_excludes } else { &cli.exclude };

        let mut chain = FilterChain::new();
        for pattern in includes {
            chain = chain.include(Self::name_filter(pattern)?);
        }
        for pattern in excludes {
            chain = chain.exclude(Self::name_filter(pattern)?);
        }
        if cli.exclude_virtual || toml.is_some_and(|t| t.filter.exclude_virtual) {
            chain = chain.exclude(KindFilter::new([AdapterKind::Virtual]));
        }
        Ok(chain)
    }

    fn name_filter(pattern: &str) -> Result<NameRegexFilter, ConfigError> {
        NameRegexFilter::new(pattern).map_err(|source| ConfigError::InvalidRegex {
            pattern: pattern.to_string(),
            source,
        })
    }

    fn resolve_concurrency(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<NonZeroUsize, ConfigError> {
        match cli
            .concurrency
            .or_else(|| toml.and_then(|t| t.inspect.concurrency))
        {
            Some(value) => {
                NonZeroUsize::new(value).ok_or(ConfigError::InvalidConcurrency { value })
            }
            None => Ok(defaults::CONCURRENCY),
        }
    }

    fn resolve_deadline(
        cli: &Cli,
        toml: Option<&TomlConfig>,
    ) -> Result<Option<Duration>, ConfigError> {
        match cli.timeout.or_else(|| toml.and_then(|t| t.inspect.timeout)) {
            Some(0) => Err(ConfigError::InvalidTimeout {
                reason: "must be greater than zero",
            }),
            Some(secs) => Ok(Some(Duration::from_secs(secs))),
            None => Ok(None),
        }
    }

    /// Builds the taxonomy: built-ins first, configured extensions appended
    /// in declared order.
    fn build_taxonomy(toml: Option<&TomlConfig>) -> Result<Vec<FeatureDefinition>, ConfigError> {
        let mut features = taxonomy::builtin();

        let entries: &[FeatureEntry] = toml.map_or(&[], |t| &t.taxonomy.feature);
        for entry in entries {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::InvalidFeature {
                    name: entry.name.clone(),
                    reason: "name must not be empty",
                });
            }
            if entry.patterns.is_empty() {
                return Err(ConfigError::InvalidFeature {
                    name: entry.name.clone(),
                    reason: "at least one pattern is required",
                });
            }
            if features.iter().any(|f| f.name == entry.name) {
                return Err(ConfigError::InvalidFeature {
                    name: entry.name.clone(),
                    reason: "duplicate feature name",
                });
            }
            features.push(FeatureDefinition::new(&entry.name, entry.patterns.iter()));
        }

        Ok(features)
    }
}

/// Writes the default configuration template to `path`.
///
/// Refuses to overwrite an existing file.
///
/// # Errors
///
/// Returns an error if the file already exists or cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Err(ConfigError::FileWrite {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "file already exists",
            ),
        });
    }

    std::fs::write(path, default_config_template()).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
#[path = "validated_tests.rs"]
mod tests;
