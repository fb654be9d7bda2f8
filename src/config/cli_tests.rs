//! Tests for CLI argument parsing.

use clap::Parser;

use super::cli::{Cli, Command, OutputFormatArg};
use crate::render::OutputFormat;

#[test]
fn no_arguments_selects_all_adapters() {
    let cli = Cli::parse_from_iter(["nicpower"]);

    assert!(cli.adapters.is_empty());
    assert!(cli.command.is_none());
    assert!(!cli.verbose);
}

#[test]
fn positional_arguments_are_adapter_names() {
    let cli = Cli::parse_from_iter(["nicpower", "Ethernet0", "Wi-Fi"]);

    assert_eq!(cli.adapters, vec!["Ethernet0", "Wi-Fi"]);
}

#[test]
fn format_parses_as_value_enum() {
    let cli = Cli::parse_from_iter(["nicpower", "--format", "json"]);

    assert_eq!(cli.format, Some(OutputFormatArg::Json));
    assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
}

#[test]
fn invalid_format_is_rejected() {
    let result = Cli::try_parse_from(["nicpower", "--format", "yaml"]);

    assert!(result.is_err());
}

#[test]
fn filter_patterns_are_repeatable() {
    let cli = Cli::parse_from_iter([
        "nicpower",
        "--include",
        "^Ethernet",
        "--include",
        "^Wi-Fi",
        "--exclude",
        "^vEthernet",
    ]);

    assert_eq!(cli.include, vec!["^Ethernet", "^Wi-Fi"]);
    assert_eq!(cli.exclude, vec!["^vEthernet"]);
}

#[test]
fn tuning_flags_parse() {
    let cli = Cli::parse_from_iter(["nicpower", "--concurrency", "8", "--timeout", "30", "-v"]);

    assert_eq!(cli.concurrency, Some(8));
    assert_eq!(cli.timeout, Some(30));
    assert!(cli.verbose);
}

#[test]
fn init_subcommand_with_default_output() {
    let cli = Cli::parse_from_iter(["nicpower", "init"]);

    assert!(cli.is_init());
    let Some(Command::Init { output }) = cli.command else {
        panic!("expected init command");
    };
    assert_eq!(output.to_str(), Some("nicpower.toml"));
}

#[test]
fn init_subcommand_with_explicit_output() {
    let cli = Cli::parse_from_iter(["nicpower", "init", "--output", "custom.toml"]);

    let Some(Command::Init { output }) = cli.command else {
        panic!("expected init command");
    };
    assert_eq!(output.to_str(), Some("custom.toml"));
}

#[test]
fn config_path_parses() {
    let cli = Cli::parse_from_iter(["nicpower", "--config", "/tmp/nicpower.toml"]);

    assert_eq!(cli.config.as_deref().and_then(|p| p.to_str()), Some("/tmp/nicpower.toml"));
}
