//! Inventory layer: per-adapter inspection and report assembly.
//!
//! This module provides:
//! - The four-stage adapter inspection pipeline ([`Inspector`])
//! - Report rows and deterministic ordering ([`ReportRow`], [`assemble`])
//! - Bounded fan-out across adapters with an optional deadline
//!   ([`gather`], [`GatherOptions`], [`Selection`])
//! - Run-aborting failures ([`InventoryError`])

mod gather;
mod inspector;
mod report;

pub use gather::{
    DEFAULT_CONCURRENCY, GatherOptions, InventoryError, Selection, gather,
};
pub use inspector::Inspector;
pub use report::{ReportRow, assemble};
