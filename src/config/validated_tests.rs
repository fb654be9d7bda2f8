//! Tests for configuration merging and validation.

use std::num::NonZeroUsize;
use std::time::Duration;

use super::*;
use crate::config::{Cli, ConfigError, TomlConfig, defaults};
use crate::inventory::Selection;
use crate::network::filter::AdapterFilter;
use crate::network::{AdapterInfo, AdapterKind};
use crate::render::OutputFormat;

fn cli(args: &[&str]) -> Cli {
    Cli::parse_from_iter(std::iter::once("nicpower").chain(args.iter().copied()))
}

fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn no_adapters_means_all() {
    let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

    assert_eq!(config.selection, Selection::All);
}

#[test]
fn named_adapters_are_explicit() {
    let config = ValidatedConfig::from_raw(&cli(&["Ethernet0", "Wi-Fi"]), None).unwrap();

    assert_eq!(
        config.selection,
        Selection::Named(vec!["Ethernet0".into(), "Wi-Fi".into()])
    );
}

// ============================================================================
// Format
// ============================================================================

#[test]
fn format_defaults_to_table() {
    let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

    assert_eq!(config.format, OutputFormat::Table);
}

#[test]
fn cli_format_wins_over_toml() {
    let config = ValidatedConfig::from_raw(
        &cli(&["--format", "json"]),
        Some(&toml("[output]\nformat = \"csv\"")),
    )
    .unwrap();

    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn toml_format_applies_without_cli() {
    let config =
        ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[output]\nformat = \"csv\""))).unwrap();

    assert_eq!(config.format, OutputFormat::Csv);
}

#[test]
fn unknown_toml_format_is_rejected() {
    let result =
        ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[output]\nformat = \"yaml\"")));

    assert!(matches!(result, Err(ConfigError::InvalidFormat { value }) if value == "yaml"));
}

// ============================================================================
// Concurrency and deadline
// ============================================================================

#[test]
fn concurrency_defaults_when_unset() {
    let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

    assert_eq!(config.concurrency, defaults::CONCURRENCY);
}

#[test]
fn cli_concurrency_wins_over_toml() {
    let config = ValidatedConfig::from_raw(
        &cli(&["--concurrency", "2"]),
        Some(&toml("[inspect]\nconcurrency = 16")),
    )
    .unwrap();

    assert_eq!(config.concurrency, NonZeroUsize::new(2).unwrap());
}

#[test]
fn zero_concurrency_is_rejected() {
    let result = ValidatedConfig::from_raw(&cli(&["--concurrency", "0"]), None);

    assert!(matches!(
        result,
        Err(ConfigError::InvalidConcurrency { value: 0 })
    ));
}

#[test]
fn deadline_is_optional() {
    let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

    assert_eq!(config.deadline, None);
}

#[test]
fn timeout_becomes_deadline() {
    let config = ValidatedConfig::from_raw(&cli(&["--timeout", "30"]), None).unwrap();

    assert_eq!(config.deadline, Some(Duration::from_secs(30)));
    assert_eq!(config.gather_options().deadline, config.deadline);
}

#[test]
fn zero_timeout_is_rejected() {
    let result = ValidatedConfig::from_raw(&cli(&["--timeout", "0"]), None);

    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

// ============================================================================
// Filters
// ============================================================================

fn virtual_adapter() -> AdapterInfo {
    AdapterInfo::new("vEthernet (WSL)", "", "{guid}", AdapterKind::Virtual)
}

#[test]
fn cli_patterns_replace_toml_patterns() {
    let config = ValidatedConfig::from_raw(
        &cli(&["--include", "^Wi-Fi"]),
        Some(&toml("[filter]\ninclude = [\"^Ethernet\"]")),
    )
    .unwrap();

    let wifi = AdapterInfo::new("Wi-Fi", "", "{guid}", AdapterKind::Wireless);
    let ethernet = AdapterInfo::new("Ethernet", "", "{guid}", AdapterKind::Ethernet);

    assert!(config.filter.matches(&wifi));
    assert!(!config.filter.matches(&ethernet));
}

#[test]
fn exclude_virtual_from_either_source() {
    let from_cli =
        ValidatedConfig::from_raw(&cli(&["--exclude-virtual"]), None).unwrap();
    let from_toml =
        ValidatedConfig::from_raw(&cli(&[]), Some(&toml("[filter]\nexclude_virtual = true")))
            .unwrap();

    assert!(!from_cli.filter.matches(&virtual_adapter()));
    assert!(!from_toml.filter.matches(&virtual_adapter()));
}

#[test]
fn invalid_regex_is_rejected() {
    let result = ValidatedConfig::from_raw(&cli(&["--include", "[unclosed"]), None);

    assert!(matches!(result, Err(ConfigError::InvalidRegex { .. })));
}

// ============================================================================
// Taxonomy
// ============================================================================

#[test]
fn taxonomy_defaults_to_builtins() {
    let config = ValidatedConfig::from_raw(&cli(&[]), None).unwrap();

    assert_eq!(config.taxonomy, crate::features::taxonomy::builtin());
}

#[test]
fn configured_features_are_appended_after_builtins() {
    let config = ValidatedConfig::from_raw(
        &cli(&[]),
        Some(&toml(
            "[[taxonomy.feature]]\nname = \"Selective Suspend\"\npatterns = [\"Selective Suspend\"]",
        )),
    )
    .unwrap();

    let builtin_len = crate::features::taxonomy::builtin().len();
    assert_eq!(config.taxonomy.len(), builtin_len + 1);
    assert_eq!(config.taxonomy[builtin_len].name, "Selective Suspend");
}

#[test]
fn duplicate_feature_name_is_rejected() {
    let result = ValidatedConfig::from_raw(
        &cli(&[]),
        Some(&toml(
            "[[taxonomy.feature]]\nname = \"Green Ethernet\"\npatterns = [\"Green\"]",
        )),
    );

    assert!(matches!(
        result,
        Err(ConfigError::InvalidFeature { reason: "duplicate feature name", .. })
    ));
}

#[test]
fn feature_without_patterns_is_rejected() {
    let result = ValidatedConfig::from_raw(
        &cli(&[]),
        Some(&toml("[[taxonomy.feature]]\nname = \"X\"\npatterns = []")),
    );

    assert!(matches!(result, Err(ConfigError::InvalidFeature { .. })));
}

// ============================================================================
// Display and init
// ============================================================================

#[test]
fn display_summarizes_config() {
    let config = ValidatedConfig::from_raw(&cli(&["Ethernet0", "--timeout", "5"]), None).unwrap();

    let summary = config.to_string();

    assert!(summary.contains("adapters: 1 named"));
    assert!(summary.contains("format: table"));
    assert!(summary.contains("timeout: 5s"));
}

#[test]
fn write_default_config_creates_parseable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nicpower.toml");

    write_default_config(&path).unwrap();

    assert!(TomlConfig::load(&path).is_ok());
}

#[test]
fn write_default_config_refuses_to_overwrite() {
    let file = tempfile::NamedTempFile::new().unwrap();

    let result = write_default_config(file.path());

    assert!(matches!(result, Err(ConfigError::FileWrite { .. })));
}
