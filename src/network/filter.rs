//! Adapter filtering for the "all adapters" selection mode.
//!
//! This module provides traits and types for narrowing the enumerated
//! adapter set based on various criteria (name patterns, adapter kind).
//!
//! # Design
//!
//! - **Pure Matchers**: [`KindFilter`] and [`NameRegexFilter`] only answer
//!   "does this adapter match?" without include/exclude semantics.
//! - **Filter Chain**: [`FilterChain`] combines matchers with correct semantics:
//!   - Exclude filters: AND logic (must pass ALL excludes)
//!   - Include filters: OR logic (pass ANY include, empty = match all)
//! - **Decorator**: [`FilteredEnumerator`] applies filtering transparently
//!   to any [`AdapterEnumerator`] implementation. Filtering narrows
//!   [`AdapterEnumerator::list_all`] only; resolution by explicit name
//!   passes through unfiltered.

use std::collections::HashSet;

use regex::Regex;

use super::{AdapterEnumerator, AdapterInfo, AdapterKind, ProviderError};

/// Trait for filtering network adapters.
///
/// Implementations determine which adapters should be included when the
/// tool operates on all enumerable adapters. Filters are composable via
/// [`FilterChain`].
///
/// # Thread Safety
///
/// Filters must be `Send + Sync` to support concurrent access.
pub trait AdapterFilter: Send + Sync {
    /// Returns `true` if the adapter should be included, `false` to filter it out.
    fn matches(&self, adapter: &AdapterInfo) -> bool;
}

// ============================================================================
// KindFilter - Pure matcher by adapter kind
// ============================================================================

/// Filters adapters by their kind (pure matcher, no include/exclude semantics).
///
/// This filter matches adapters whose kind is contained in the specified set.
/// Use with [`FilterChain`] to apply include/exclude logic.
#[derive(Debug, Clone)]
pub struct KindFilter {
    kinds: HashSet<AdapterKind>,
}

impl KindFilter {
    /// Creates a kind filter matching any of the specified kinds.
    #[must_use]
    pub fn new(kinds: impl IntoIterator<Item = AdapterKind>) -> Self {
        Self {
            kinds: kinds.into_iter().collect(),
        }
    }

    /// Returns true if no kinds are configured (matches nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl AdapterFilter for KindFilter {
    fn matches(&self, adapter: &AdapterInfo) -> bool {
        self.kinds.contains(&adapter.kind)
    }
}

// ============================================================================
// NameRegexFilter - Pure matcher by name pattern
// ============================================================================

/// Filters adapters by name pattern (pure matcher, no include/exclude semantics).
///
/// This filter simply checks if the adapter name matches the regex pattern.
/// Use with [`FilterChain`] to apply include/exclude logic.
#[derive(Debug)]
pub struct NameRegexFilter {
    pattern: Regex,
}

impl NameRegexFilter {
    /// Creates a name filter with the given regex pattern.
    ///
    /// # Errors
    ///
    /// Returns an error if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Returns a reference to the regex pattern.
    #[must_use]
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }
}

impl AdapterFilter for NameRegexFilter {
    fn matches(&self, adapter: &AdapterInfo) -> bool {
        self.pattern.is_match(&adapter.name)
    }
}

// ============================================================================
// FilterChain - Include OR / Exclude AND semantics
// ============================================================================

/// Filter chain with correct include/exclude semantics.
///
/// Evaluation order:
/// 1. **Exclude filters (AND)**: Any match → reject. Adapter must pass ALL excludes.
/// 2. **Include filters (OR)**: Any match → accept. Adapter needs to pass ANY include.
///    Empty includes = match all (passthrough).
#[derive(Default)]
pub struct FilterChain {
    includes: Vec<Box<dyn AdapterFilter>>,
    excludes: Vec<Box<dyn AdapterFilter>>,
}

impl FilterChain {
    /// Creates an empty filter chain (matches all adapters).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an include filter (OR semantics).
    ///
    /// Adapters matching ANY include filter will be accepted
    /// (after passing all exclude filters).
    #[must_use]
    pub fn include<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.includes.push(Box::new(filter));
        self
    }

    /// Adds an exclude filter (AND semantics - must not match ANY).
    ///
    /// Adapters matching ANY exclude filter will be rejected,
    /// regardless of include filters.
    #[must_use]
    pub fn exclude<F: AdapterFilter + 'static>(mut self, filter: F) -> Self {
        self.excludes.push(Box::new(filter));
        self
    }

    /// Returns true if no filters are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.includes.is_empty() && self.excludes.is_empty()
    }

    /// Returns the total number of configured filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.includes.len() + self.excludes.len()
    }
}

impl AdapterFilter for FilterChain {
    fn matches(&self, adapter: &AdapterInfo) -> bool {
        // 1. Any exclude match → reject
        if self.excludes.iter().any(|f| f.matches(adapter)) {
            return false;
        }

        // 2. No includes = all pass; otherwise any include match → accept
        self.includes.is_empty() || self.includes.iter().any(|f| f.matches(adapter))
    }
}

impl std::fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterChain")
            .field("include_count", &self.includes.len())
            .field("exclude_count", &self.excludes.len())
            .finish()
    }
}

// ============================================================================
// FilteredEnumerator - Decorator applying a filter to enumeration
// ============================================================================

/// An enumerator decorator that applies a filter to [`AdapterEnumerator::list_all`].
///
/// Resolution by explicit name intentionally bypasses the filter: a user
/// who names an adapter gets it inspected even if the filter would have
/// skipped it in all-adapters mode.
///
/// # Type Parameters
///
/// - `E`: The inner enumerator type (implements [`AdapterEnumerator`])
/// - `A`: The filter type (implements [`AdapterFilter`])
#[derive(Debug)]
pub struct FilteredEnumerator<E, A> {
    inner: E,
    filter: A,
}

impl<E, A> FilteredEnumerator<E, A> {
    /// Creates a new filtered enumerator.
    #[must_use]
    pub const fn new(inner: E, filter: A) -> Self {
        Self { inner, filter }
    }

    /// Returns a reference to the inner enumerator.
    pub const fn inner(&self) -> &E {
        &self.inner
    }
}

impl<E: AdapterEnumerator, A: AdapterFilter> AdapterEnumerator for FilteredEnumerator<E, A> {
    fn list_all(&self) -> Result<Vec<AdapterInfo>, ProviderError> {
        let adapters = self.inner.list_all()?;
        Ok(adapters
            .into_iter()
            .filter(|adapter| self.filter.matches(adapter))
            .collect())
    }

    fn resolve(&self, name: &str) -> Result<AdapterInfo, ProviderError> {
        self.inner.resolve(name)
    }
}

// Blanket implementation: any &T where T: AdapterFilter also implements AdapterFilter
impl<T: AdapterFilter + ?Sized> AdapterFilter for &T {
    fn matches(&self, adapter: &AdapterInfo) -> bool {
        (*self).matches(adapter)
    }
}

// Box<dyn AdapterFilter> implements AdapterFilter
impl AdapterFilter for Box<dyn AdapterFilter> {
    fn matches(&self, adapter: &AdapterInfo) -> bool {
        self.as_ref().matches(adapter)
    }
}
