//! Stub providers for platforms without an adapter backend.

use crate::network::{
    AdapterEnumerator, AdapterInfo, AdapterProperty, AdvancedPropertyProvider, PowerManagement,
    PowerManagementProvider, ProviderError,
};

/// Provider stub used on platforms without adapter support.
///
/// Every operation fails with [`ProviderError::Platform`]; the inspector
/// degrades this into diagnostics and error rows as usual, so the tool
/// still runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedProvider {
    _private: (),
}

impl UnsupportedProvider {
    /// Creates a new stub provider.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    fn error() -> ProviderError {
        ProviderError::Platform {
            message: "network adapter providers are only available on Windows".into(),
        }
    }
}

impl AdapterEnumerator for UnsupportedProvider {
    fn list_all(&self) -> Result<Vec<AdapterInfo>, ProviderError> {
        Err(Self::error())
    }
}

impl PowerManagementProvider for UnsupportedProvider {
    fn get(&self, _adapter: &AdapterInfo) -> Result<PowerManagement, ProviderError> {
        Err(Self::error())
    }
}

impl AdvancedPropertyProvider for UnsupportedProvider {
    fn list(&self, _adapter: &AdapterInfo) -> Result<Vec<AdapterProperty>, ProviderError> {
        Err(Self::error())
    }
}
