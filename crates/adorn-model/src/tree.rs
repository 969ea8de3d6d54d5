//! Root resource collection
//!
//! Provides [`ResourceTree`], the root of the model owned by one
//! generation run.

use crate::kind::Kind;
use crate::node::Node;
use serde_json::Value;

/// Root collection of resource nodes for one generation run
///
/// The tree owns its resources; the resolution engine only holds
/// transient borrows during application. Runs never share a tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceTree {
    items: Vec<Node>,
}

impl ResourceTree {
    /// Create an empty tree
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root resource
    pub fn add(&mut self, resource: Node) {
        self.items.push(resource);
    }

    /// Number of root resources
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the tree has no resources
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate root resources
    pub fn resources(&self) -> impl Iterator<Item = &Node> {
        self.items.iter()
    }

    /// Iterate root resources mutably
    pub fn resources_mut(&mut self) -> impl Iterator<Item = &mut Node> {
        self.items.iter_mut()
    }

    /// First resource of `kind` named `name`
    #[must_use]
    pub fn find(&self, kind: Kind, name: &str) -> Option<&Node> {
        self.items
            .iter()
            .find(|r| r.kind() == kind && r.name() == Some(name))
    }

    /// Serialize the whole tree as an array of resource values
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Array(self.items.iter().map(Node::to_value).collect())
    }
}
