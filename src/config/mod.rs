//! Configuration layer for nicpower.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Configuration file generation ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Configuration values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments** - Values explicitly passed via command line
//! 2. **TOML config file** - Values from the configuration file
//! 3. **Built-in defaults** - Hardcoded default values
//!
//! For filter patterns (`include`, `exclude`), CLI patterns **replace**
//! TOML patterns entirely (not merged). Include and exclude patterns are
//! handled independently: if the CLI has `--include`, only TOML includes
//! are replaced; TOML excludes are still used (unless CLI excludes are
//! specified too).
//!
//! # Boolean Flag Semantics
//!
//! Boolean flags (`--exclude-virtual`) use OR semantics: once set `true`
//! in TOML, CLI cannot override to `false` (flags only enable, not disable).
//!
//! # TOML-Only Options
//!
//! The feature taxonomy extension (`[[taxonomy.feature]]`) is TOML-only;
//! pattern lists do not fit CLI flags well.

mod cli;
pub mod defaults;
mod error;
mod toml;
mod validated;

#[cfg(test)]
mod cli_tests;

pub use cli::{Cli, Command, OutputFormatArg};
pub use error::ConfigError;
pub use toml::{TomlConfig, default_config_template};
pub use validated::{ValidatedConfig, write_default_config};
