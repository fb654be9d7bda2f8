//! Platform-specific provider implementations.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of the [`AdapterEnumerator`], [`PowerManagementProvider`],
//! and [`AdvancedPropertyProvider`] traits.
//!
//! # Platform Support
//!
//! - **Windows**: Enumeration via `GetAdaptersAddresses`; power-management
//!   flag and advanced properties via the network-class registry keys.
//! - **Other platforms**: stub providers that fail with a platform error,
//!   keeping the binary buildable everywhere while the core stays fully
//!   testable through the traits.

use std::sync::Arc;

use super::{AdapterEnumerator, AdvancedPropertyProvider, PowerManagementProvider};

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::{WindowsAdvancedProperties, WindowsEnumerator, WindowsPowerManagement};

#[cfg(not(windows))]
mod unsupported;

#[cfg(not(windows))]
pub use unsupported::UnsupportedProvider;

/// The three platform providers, ready for injection into the inspector.
pub struct PlatformProviders {
    /// Adapter enumeration and name resolution.
    pub enumerator: Arc<dyn AdapterEnumerator>,
    /// Power-management flag retrieval.
    pub power: Arc<dyn PowerManagementProvider>,
    /// Advanced-property list retrieval.
    pub advanced: Arc<dyn AdvancedPropertyProvider>,
}

/// Builds the provider set for the current platform.
#[must_use]
pub fn providers() -> PlatformProviders {
    #[cfg(windows)]
    {
        PlatformProviders {
            enumerator: Arc::new(WindowsEnumerator::new()),
            power: Arc::new(WindowsPowerManagement::new()),
            advanced: Arc::new(WindowsAdvancedProperties::new()),
        }
    }

    #[cfg(not(windows))]
    {
        let stub = Arc::new(UnsupportedProvider::new());
        PlatformProviders {
            enumerator: stub.clone(),
            power: stub.clone(),
            advanced: stub,
        }
    }
}
