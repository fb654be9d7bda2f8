//! Application execution logic.
//!
//! This module wires the platform providers, the inspector, and the
//! selected presenter together for one inventory run.

use std::sync::Arc;

use thiserror::Error;

use nicpower::config::ValidatedConfig;
use nicpower::inventory::{Inspector, InventoryError, gather};
use nicpower::network::filter::FilteredEnumerator;
use nicpower::network::platform;
use nicpower::render::{self, RenderError};

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The inventory run failed outright (enumerator unavailable).
    #[error("Inventory failed: {0}")]
    Inventory(#[source] InventoryError),

    /// The report could not be rendered.
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

/// Executes one inventory run.
///
/// This function:
/// 1. Builds the platform providers and wraps the enumerator with the
///    configured all-adapters filter
/// 2. Gathers report rows across the selected adapters (bounded fan-out,
///    optional deadline)
/// 3. Renders the sorted report to stdout
///
/// Per-adapter failures surface as degraded rows or warnings, never as an
/// error from this function.
///
/// # Errors
///
/// Returns an error only when the enumerator itself fails in all-adapters
/// mode or the report cannot be rendered.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    // Extract gather tuning before consuming config fields.
    let options = config.gather_options();

    let providers = platform::providers();
    let enumerator = Arc::new(FilteredEnumerator::new(providers.enumerator, config.filter));

    let inspector = Arc::new(Inspector::new(
        enumerator,
        providers.power,
        providers.advanced,
        config.taxonomy,
    ));

    let rows = gather(inspector, config.selection, &options)
        .await
        .map_err(RunError::Inventory)?;

    tracing::debug!(rows = rows.len(), "inventory complete");

    let report = render::render(config.format, &rows)?;
    if report.ends_with('\n') {
        print!("{report}");
    } else {
        println!("{report}");
    }

    Ok(())
}
