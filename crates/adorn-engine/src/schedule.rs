//! Topological scheduling
//!
//! Provides [`Schedule`], the deterministic constraint-satisfying
//! application order for one registry.

use crate::decorator::{Decorator, DecoratorKind};
use crate::error::EngineError;
use crate::graph::ConstraintGraph;
use crate::registry::Registry;
use indexmap::IndexMap;
use petgraph::graphmap::DiGraphMap;
use petgraph::Direction;
use std::collections::{BTreeMap, BTreeSet};

/// Ordered application list for one generation run
///
/// Kahn's algorithm over the constraint graph with a lexicographically
/// ordered ready frontier: unconstrained kind pairs always order by tag
/// name, so the sequence is identical for every registration order of
/// the same registry. Instances within one kind keep registration order.
#[derive(Debug)]
pub struct Schedule {
    decorators: Vec<Box<dyn Decorator>>,
}

impl Schedule {
    /// Resolve a registry into an application order
    ///
    /// Consumes the registry: a schedule is the only thing a registry
    /// becomes, and each is used once per run.
    ///
    /// # Errors
    /// [`EngineError::SelfReference`] from graph construction, or
    /// [`EngineError::CyclicConstraint`] naming the kinds a cycle leaves
    /// unschedulable. Nothing has been applied when either is returned.
    pub fn resolve(registry: Registry) -> Result<Self, EngineError> {
        let graph = ConstraintGraph::build(&registry)?;
        let order = kind_order(graph.inner())?;

        let mut by_kind: IndexMap<DecoratorKind, Vec<Box<dyn Decorator>>> = IndexMap::new();
        for decorator in registry.into_decorators() {
            by_kind.entry(decorator.kind()).or_default().push(decorator);
        }

        let mut decorators = Vec::new();
        for kind in order {
            if let Some(group) = by_kind.shift_remove(&kind) {
                decorators.extend(group);
            }
        }

        Ok(Self { decorators })
    }

    /// Number of scheduled instances
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.decorators.len()
    }

    /// Whether the schedule is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decorators.is_empty()
    }

    /// Iterate instances in application order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Decorator> {
        self.decorators.iter().map(AsRef::as_ref)
    }

    /// Kind tags in application order, one per instance
    #[must_use]
    pub fn kind_sequence(&self) -> Vec<DecoratorKind> {
        self.decorators.iter().map(|d| d.kind()).collect()
    }
}

/// One valid topological order over kinds, ties broken by tag name
fn kind_order(graph: &DiGraphMap<DecoratorKind, ()>) -> Result<Vec<DecoratorKind>, EngineError> {
    let mut in_degree: BTreeMap<DecoratorKind, usize> = graph
        .nodes()
        .map(|n| (n, graph.neighbors_directed(n, Direction::Incoming).count()))
        .collect();

    let mut ready: BTreeSet<DecoratorKind> = in_degree
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(kind, _)| *kind)
        .collect();

    let mut order = Vec::with_capacity(in_degree.len());
    while let Some(kind) = ready.pop_first() {
        order.push(kind);
        for successor in graph.neighbors_directed(kind, Direction::Outgoing) {
            if let Some(degree) = in_degree.get_mut(&successor) {
                *degree -= 1;
                if *degree == 0 {
                    ready.insert(successor);
                }
            }
        }
    }

    if order.len() < in_degree.len() {
        let kinds: Vec<DecoratorKind> = in_degree
            .keys()
            .filter(|kind| !order.contains(kind))
            .copied()
            .collect();
        return Err(EngineError::CyclicConstraint { kinds });
    }

    Ok(order)
}
