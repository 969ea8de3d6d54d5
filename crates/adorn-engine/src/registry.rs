//! Decorator registry
//!
//! Provides [`Registry`], the deduplicated collection of decorator
//! instances for one generation run.

use crate::decorator::{Decorator, DecoratorKind, Fingerprint};
use indexmap::{IndexMap, IndexSet};

/// Unordered bag of decorators, deduplicated by fingerprint
///
/// Discovery may produce the same decorator several times (one per
/// discovery path); equal fingerprints collapse to the first-registered
/// instance. Relative registration order of what survives is preserved -
/// the scheduler relies on it for stable ordering within a kind.
#[derive(Debug, Default)]
pub struct Registry {
    decorators: IndexMap<Fingerprint, Box<dyn Decorator>>,
}

impl Registry {
    /// Create an empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a decorator
    ///
    /// Returns `false` when an equal instance was already registered and
    /// this one was dropped.
    pub fn register(&mut self, decorator: impl Decorator + 'static) -> bool {
        self.register_boxed(Box::new(decorator))
    }

    /// Register an already-boxed decorator
    pub fn register_boxed(&mut self, decorator: Box<dyn Decorator>) -> bool {
        let fingerprint = decorator.fingerprint();
        if self.decorators.contains_key(&fingerprint) {
            tracing::debug!(kind = %decorator.kind(), "duplicate decorator collapsed");
            return false;
        }
        self.decorators.insert(fingerprint, decorator);
        true
    }

    /// Number of surviving decorators
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    /// Whether the registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Whether any instance of `kind` is registered
    #[must_use]
    pub fn contains_kind(&self, kind: DecoratorKind) -> bool {
        self.decorators.values().any(|d| d.kind() == kind)
    }

    /// Iterate decorators in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Decorator> {
        self.decorators.values().map(AsRef::as_ref)
    }

    /// Distinct kinds in first-registration order
    #[must_use]
    pub fn kinds(&self) -> Vec<DecoratorKind> {
        let mut seen: IndexSet<DecoratorKind> = IndexSet::new();
        for decorator in self.decorators.values() {
            seen.insert(decorator.kind());
        }
        seen.into_iter().collect()
    }

    pub(crate) fn into_decorators(self) -> impl Iterator<Item = Box<dyn Decorator>> {
        self.decorators.into_values()
    }
}
