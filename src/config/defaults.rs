//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Default number of concurrently inspected adapters.
pub const CONCURRENCY: NonZeroUsize = crate::inventory::DEFAULT_CONCURRENCY;

/// Name of the configuration file looked up in the user config directory.
pub const CONFIG_FILE_NAME: &str = "nicpower.toml";

/// Default location of the configuration file, when the platform has a
/// user config directory.
#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nicpower").join(CONFIG_FILE_NAME))
}
