//! Decorator contract
//!
//! Provides the [`Decorator`] trait plus the metadata types the engine
//! schedules and dispatches by: [`DecoratorKind`] for constraint
//! matching, [`Target`] for named-resource matching, [`Fingerprint`] for
//! value-equality deduplication, and [`Propagation`] for the optional
//! second-phase visit into a child node.

use crate::error::MutationError;
use adorn_model::{Kind, Node};
use adorn_project::Project;
use std::fmt::{self, Debug, Display, Formatter};

/// Tag identifying a decorator family
///
/// Constraint matching operates on kinds, never on instances: an edge
/// between two kinds orders every instance of one against every instance
/// of the other. Declared explicitly rather than derived from the
/// implementing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DecoratorKind(&'static str);

impl DecoratorKind {
    /// Declare a kind tag
    #[inline]
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self(tag)
    }

    /// Tag string
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for DecoratorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Which resources a decorator applies to
///
/// A wildcard decorator visits every resource carrying its node kind; a
/// named decorator only visits resources whose owner name matches
/// exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Target {
    /// Apply to every matching resource
    #[default]
    Any,
    /// Apply only to the resource with this name
    Named(String),
}

impl Target {
    /// Named target
    #[inline]
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Whether a resource with `owner` name is in scope
    #[inline]
    #[must_use]
    pub fn matches(&self, owner: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Named(name) => owner == Some(name.as_str()),
        }
    }
}

/// Value-equality identity of a decorator instance
///
/// Two instances with equal fingerprints are the same mutation arriving
/// twice (e.g. from two discovery paths) and collapse to one at
/// registration. The fingerprint covers the kind plus whichever
/// parameters the decorator considers semantic - an annotation key
/// usually, a value usually not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    kind: DecoratorKind,
    params: Vec<String>,
}

impl Fingerprint {
    /// Fingerprint with no semantic parameters
    #[inline]
    #[must_use]
    pub fn new(kind: DecoratorKind) -> Self {
        Self {
            kind,
            params: Vec::new(),
        }
    }

    /// Append a semantic parameter
    #[inline]
    #[must_use]
    pub fn with_param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Kind component
    #[inline]
    #[must_use]
    pub fn kind(&self) -> DecoratorKind {
        self.kind
    }
}

/// Read-only context handed to a decorator during application
#[derive(Debug, Clone, Copy)]
pub struct ApplyContext<'a> {
    project: &'a Project,
    owner: &'a str,
}

impl<'a> ApplyContext<'a> {
    /// Create a context for one resource visit
    #[inline]
    #[must_use]
    pub fn new(project: &'a Project, owner: &'a str) -> Self {
        Self { project, owner }
    }

    /// Project metadata for this run
    #[inline]
    #[must_use]
    pub fn project(&self) -> &'a Project {
        self.project
    }

    /// Name of the resource owning the node under mutation
    #[inline]
    #[must_use]
    pub fn owner(&self) -> &'a str {
        self.owner
    }
}

/// Deferred mutation of a child node
pub type ChildMutation<'d> = Box<dyn FnOnce(&mut Node) -> Result<(), MutationError> + 'd>;

/// Outcome of a decorator's first-phase visit
///
/// `Descend` asks the engine to resolve (or create) a child of the given
/// kind under the node just mutated and run the callback against it,
/// before the next candidate node is visited.
pub enum Propagation<'d> {
    /// Mutation complete
    Done,
    /// Continue into a child node
    Descend {
        /// Kind of child to resolve or create
        kind: Kind,
        /// Mutation to run against the child
        mutate: ChildMutation<'d>,
    },
}

impl<'d> Propagation<'d> {
    /// Finish without propagation
    #[inline]
    #[must_use]
    pub fn done() -> Self {
        Self::Done
    }

    /// Propagate into a child of `kind`
    #[inline]
    pub fn descend(
        kind: Kind,
        mutate: impl FnOnce(&mut Node) -> Result<(), MutationError> + 'd,
    ) -> Self {
        Self::Descend {
            kind,
            mutate: Box::new(mutate),
        }
    }
}

impl Debug for Propagation<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done => f.write_str("Done"),
            Self::Descend { kind, .. } => f
                .debug_struct("Descend")
                .field("kind", kind)
                .finish_non_exhaustive(),
        }
    }
}

/// A unit of mutation over the resource model tree
///
/// Implementations are immutable after construction and applied at most
/// once per matched node. `before`/`after` must never name the
/// decorator's own kind; constraints naming kinds absent from the
/// current registry are dropped silently.
pub trait Decorator: Debug {
    /// Kind tag for constraint matching
    fn kind(&self) -> DecoratorKind;

    /// Which model node kind this decorator mutates
    fn node_kind(&self) -> Kind;

    /// Resource targeting policy
    fn target(&self) -> Target {
        Target::Any
    }

    /// Kinds every instance of this decorator must precede
    fn before(&self) -> Vec<DecoratorKind> {
        Vec::new()
    }

    /// Kinds every instance of this decorator must follow
    fn after(&self) -> Vec<DecoratorKind> {
        Vec::new()
    }

    /// Identity for registration-time deduplication
    fn fingerprint(&self) -> Fingerprint;

    /// Mutate one matched node
    ///
    /// # Errors
    /// [`MutationError`] when the node's shape violates the decorator's
    /// structural assumptions; fatal for the run.
    fn apply<'d>(
        &'d self,
        node: &mut Node,
        ctx: &ApplyContext<'_>,
    ) -> Result<Propagation<'d>, MutationError>;
}
