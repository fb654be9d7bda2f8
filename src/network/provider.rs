//! Collaborator traits for adapter enumeration and property retrieval.

use thiserror::Error;

use super::{AdapterInfo, AdapterProperty, PowerManagement};

/// Error type for adapter enumeration and property query operations.
///
/// Describes what went wrong without dictating recovery strategy.
/// Callers decide how to handle each error variant: the inspector treats
/// [`ProviderError::NotFound`] during resolution as fatal for that adapter
/// and every other failure as locally recoverable.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// No adapter with the requested name exists.
    #[error("Adapter not found: {name}")]
    NotFound {
        /// The name that could not be resolved.
        name: String,
    },

    /// Platform-specific error with a generic message.
    #[error("Platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

/// Trait for enumerating and resolving network adapters.
///
/// # Design
///
/// - All external dependencies implement one of the provider traits,
///   enabling dependency injection for testing with mock implementations.
/// - Platform-specific implementations are provided in [`super::platform`].
pub trait AdapterEnumerator: Send + Sync {
    /// Lists every adapter currently known to the platform.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the platform enumeration API fails;
    /// this is the one failure the tool treats as catastrophic when it is
    /// asked to inspect all adapters.
    fn list_all(&self) -> Result<Vec<AdapterInfo>, ProviderError>;

    /// Resolves a single adapter by friendly name (case-insensitive).
    ///
    /// The default implementation scans [`AdapterEnumerator::list_all`];
    /// platforms with a cheaper direct lookup may override it.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::NotFound`] when no adapter carries the
    /// given name, or any error from the underlying enumeration.
    fn resolve(&self, name: &str) -> Result<AdapterInfo, ProviderError> {
        self.list_all()?
            .into_iter()
            .find(|adapter| adapter.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ProviderError::NotFound { name: name.into() })
    }
}

/// Trait for querying an adapter's power-management setting.
pub trait PowerManagementProvider: Send + Sync {
    /// Returns the adapter's power-management setting.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the setting cannot be read. The
    /// inspector converts this into a degraded report row rather than
    /// aborting the adapter.
    fn get(&self, adapter: &AdapterInfo) -> Result<PowerManagement, ProviderError>;
}

/// Trait for listing an adapter's driver-exposed advanced properties.
pub trait AdvancedPropertyProvider: Send + Sync {
    /// Returns all advanced properties the driver exposes for the adapter.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the property list cannot be read.
    /// The inspector recovers by treating the adapter as exposing no
    /// properties at all.
    fn list(&self, adapter: &AdapterInfo) -> Result<Vec<AdapterProperty>, ProviderError>;
}

// Shared handles forward to the underlying enumerator, preserving any
// overridden `resolve`.
impl<T: AdapterEnumerator + ?Sized> AdapterEnumerator for std::sync::Arc<T> {
    fn list_all(&self) -> Result<Vec<AdapterInfo>, ProviderError> {
        self.as_ref().list_all()
    }

    fn resolve(&self, name: &str) -> Result<AdapterInfo, ProviderError> {
        self.as_ref().resolve(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::AdapterKind;

    /// A minimal enumerator backed by a fixed adapter list.
    struct FixedEnumerator {
        adapters: Vec<AdapterInfo>,
    }

    impl AdapterEnumerator for FixedEnumerator {
        fn list_all(&self) -> Result<Vec<AdapterInfo>, ProviderError> {
            Ok(self.adapters.clone())
        }
    }

    /// An enumerator that always fails, for error-path tests.
    struct FailingEnumerator;

    impl AdapterEnumerator for FailingEnumerator {
        fn list_all(&self) -> Result<Vec<AdapterInfo>, ProviderError> {
            Err(ProviderError::Platform {
                message: "enumeration unavailable".into(),
            })
        }
    }

    fn ethernet0() -> AdapterInfo {
        AdapterInfo::new("Ethernet0", "Test NIC", "{guid-0}", AdapterKind::Ethernet)
    }

    #[test]
    fn default_resolve_finds_adapter_by_name() {
        let enumerator = FixedEnumerator {
            adapters: vec![ethernet0()],
        };

        let resolved = enumerator.resolve("Ethernet0").unwrap();

        assert_eq!(resolved, ethernet0());
    }

    #[test]
    fn default_resolve_is_case_insensitive() {
        let enumerator = FixedEnumerator {
            adapters: vec![ethernet0()],
        };

        assert!(enumerator.resolve("ethernet0").is_ok());
        assert!(enumerator.resolve("ETHERNET0").is_ok());
    }

    #[test]
    fn default_resolve_reports_not_found() {
        let enumerator = FixedEnumerator {
            adapters: vec![ethernet0()],
        };

        let error = enumerator.resolve("Bad0").unwrap_err();

        assert!(matches!(error, ProviderError::NotFound { ref name } if name == "Bad0"));
        assert!(error.to_string().contains("Bad0"));
    }

    #[test]
    fn default_resolve_propagates_enumeration_failure() {
        let error = FailingEnumerator.resolve("Ethernet0").unwrap_err();

        assert!(matches!(error, ProviderError::Platform { .. }));
    }

    #[test]
    fn platform_error_displays_message() {
        let error = ProviderError::Platform {
            message: "unsupported operation".to_string(),
        };
        assert!(error.to_string().contains("unsupported operation"));
    }
}
