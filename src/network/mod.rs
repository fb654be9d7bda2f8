//! Network layer for enumerating adapters and retrieving their properties.
//!
//! This module provides types and traits for:
//! - Representing adapters and their raw property values ([`AdapterInfo`],
//!   [`AdapterProperty`], [`PropertyValue`], [`PowerManagement`])
//! - Adapter type classification ([`AdapterKind`])
//! - The collaborator contracts the inspector depends on
//!   ([`AdapterEnumerator`], [`PowerManagementProvider`],
//!   [`AdvancedPropertyProvider`])
//! - Adapter filtering for all-adapters mode ([`filter`])
//! - Platform-specific implementations ([`platform`])

mod adapter;
pub mod filter;
pub mod platform;
mod provider;


pub use adapter::{AdapterInfo, AdapterKind, AdapterProperty, PowerManagement, PropertyValue};
pub use provider::{
    AdapterEnumerator, AdvancedPropertyProvider, PowerManagementProvider, ProviderError,
};
