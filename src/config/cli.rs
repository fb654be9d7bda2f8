//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::render::OutputFormat;

/// nicpower: network adapter power-saving inventory
///
/// Reports the configured state of power-saving features (device power-off
/// permission, Energy Efficient Ethernet variants) for the named network
/// adapters, or for all adapters when none are named.
#[derive(Debug, Parser)]
#[command(name = "nicpower")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adapter names to inspect (all adapters when omitted)
    #[arg(value_name = "ADAPTER")]
    pub adapters: Vec<String>,

    /// Report output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Regex pattern for adapters to include in all-adapters mode (can be specified multiple times)
    #[arg(long = "include", value_name = "PATTERN")]
    pub include: Vec<String>,

    /// Regex pattern for adapters to exclude in all-adapters mode (can be specified multiple times)
    #[arg(long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Skip virtual adapters (`VMware`, `VirtualBox`, `Hyper-V`, etc.) in all-adapters mode
    #[arg(long = "exclude-virtual")]
    pub exclude_virtual: bool,

    /// Maximum number of adapters inspected concurrently
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Overall time budget in seconds for the whole inventory
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for nicpower
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = "nicpower.toml")]
        output: PathBuf,
    },
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Aligned plain-text table
    Table,
    /// Comma-separated values
    Csv,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Table => Self::Table,
            OutputFormatArg::Csv => Self::Csv,
            OutputFormatArg::Json => Self::Json,
        }
    }
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
