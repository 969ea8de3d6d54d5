//! Constraint graph construction
//!
//! Provides [`ConstraintGraph`], the directed graph over decorator kinds
//! built from per-instance before/after declarations.

use crate::decorator::DecoratorKind;
use crate::error::EngineError;
use crate::registry::Registry;
use petgraph::graphmap::DiGraphMap;

/// Directed graph over the decorator kinds present in one registry
///
/// An edge A -> B means every instance of A applies before every
/// instance of B. Declarations naming kinds with zero registered
/// instances add no edge: constraints are aspirational, not assertions
/// of presence.
#[derive(Debug)]
pub struct ConstraintGraph {
    graph: DiGraphMap<DecoratorKind, ()>,
}

impl ConstraintGraph {
    /// Build the graph from a deduplicated registry
    ///
    /// # Errors
    /// [`EngineError::SelfReference`] when a decorator's constraints name
    /// its own kind. Cycles are not detected here; the scheduler reports
    /// them with the kinds involved.
    pub fn build(registry: &Registry) -> Result<Self, EngineError> {
        let mut graph = DiGraphMap::new();
        for kind in registry.kinds() {
            graph.add_node(kind);
        }

        for decorator in registry.iter() {
            let kind = decorator.kind();
            for successor in decorator.before() {
                if successor == kind {
                    return Err(EngineError::SelfReference { kind });
                }
                if graph.contains_node(successor) {
                    graph.add_edge(kind, successor, ());
                } else {
                    tracing::debug!(
                        from = %kind,
                        to = %successor,
                        "dropping constraint against absent kind"
                    );
                }
            }
            for predecessor in decorator.after() {
                if predecessor == kind {
                    return Err(EngineError::SelfReference { kind });
                }
                if graph.contains_node(predecessor) {
                    graph.add_edge(predecessor, kind, ());
                } else {
                    tracing::debug!(
                        from = %predecessor,
                        to = %kind,
                        "dropping constraint against absent kind"
                    );
                }
            }
        }

        Ok(Self { graph })
    }

    /// Number of kinds in the graph
    #[inline]
    #[must_use]
    pub fn kind_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of ordering edges
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether an A-before-B edge exists
    #[must_use]
    pub fn orders(&self, before: DecoratorKind, after: DecoratorKind) -> bool {
        self.graph.contains_edge(before, after)
    }

    pub(crate) fn inner(&self) -> &DiGraphMap<DecoratorKind, ()> {
        &self.graph
    }
}
