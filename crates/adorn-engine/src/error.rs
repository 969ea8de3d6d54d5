//! Error types for the resolution engine
//!
//! Three fatal classes, all fail-fast:
//! - configuration errors caught while building the constraint graph
//! - cyclic constraints caught while scheduling, before any mutation
//! - mutation failures during application (no rollback; the partially
//!   mutated tree is the caller's to discard)
//!
//! An unmatched target is deliberately NOT here - a decorator whose node
//! kind has no instances this run is a logged no-op.

use crate::decorator::DecoratorKind;
use adorn_model::ModelError;

/// Fatal errors for one generation run
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A decorator's ordering constraints reference its own kind
    #[error("decorator kind {kind} references itself in its ordering constraints")]
    SelfReference {
        /// The offending kind
        kind: DecoratorKind,
    },

    /// Before/after declarations form a cycle
    #[error("cyclic ordering constraint among decorator kinds {kinds:?}")]
    CyclicConstraint {
        /// Kinds left unschedulable by the cycle
        kinds: Vec<DecoratorKind>,
    },

    /// A decorator failed while mutating its target
    #[error("decorator {decorator} failed to apply: {source}")]
    Mutation {
        /// Kind of the failing decorator
        decorator: DecoratorKind,
        /// Underlying failure
        #[source]
        source: MutationError,
    },
}

/// Failures raised by a decorator's mutation
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// The target node's shape violates a structural assumption
    #[error(transparent)]
    Shape(#[from] ModelError),

    /// Structure the decorator requires is missing from the tree
    #[error("missing required {0}")]
    MissingStructure(String),

    /// An external metadata lookup failed
    #[error("metadata lookup failed: {0}")]
    Provider(String),
}

impl MutationError {
    /// Missing-structure failure
    #[inline]
    #[must_use]
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingStructure(what.into())
    }
}
