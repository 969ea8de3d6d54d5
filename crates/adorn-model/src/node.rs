//! Builder nodes
//!
//! Provides [`Node`], the mutable unit of the resource model tree.

use crate::kind::Kind;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// One mutable builder node in the resource model tree
///
/// A node owns scalar/object values keyed by field name plus child nodes
/// of declared kinds. Resource roots additionally carry an owner name
/// used by named-target matching; nested nodes leave it unset.
///
/// Value iteration and serialization follow insertion order, so two runs
/// that perform the same mutations in the same order produce identical
/// output.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    kind: Kind,
    name: Option<String>,
    values: IndexMap<String, Value>,
    children: Vec<Node>,
}

/// Shape violations raised by value accessors
///
/// Decorators surface these as mutation failures; the model itself never
/// logs or recovers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// A map-valued field holds something other than an object
    #[error("field `{field}` on {kind} is not an object")]
    NotAnObject {
        /// Kind of the node holding the field
        kind: &'static str,
        /// Offending field name
        field: String,
    },

    /// A list-valued field holds something other than an array
    #[error("field `{field}` on {kind} is not an array")]
    NotAnArray {
        /// Kind of the node holding the field
        kind: &'static str,
        /// Offending field name
        field: String,
    },
}

impl Node {
    /// Create an anonymous node
    #[inline]
    #[must_use]
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            name: None,
            values: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a named resource node
    ///
    /// The name participates in named-target matching only; schema-level
    /// naming (e.g. `metadata.name`) is the caller's concern.
    #[inline]
    #[must_use]
    pub fn named(kind: Kind, name: impl Into<String>) -> Self {
        let mut node = Self::new(kind);
        node.name = Some(name.into());
        node
    }

    /// Kind of this node
    #[inline]
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Owner name, if this node is a named resource root
    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Set a scalar or structured value
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(field.into(), value.into());
    }

    /// Read a value
    #[inline]
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.values.get(field)
    }

    /// Read a string value
    #[inline]
    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.values.get(field).and_then(Value::as_str)
    }

    /// Insert `key = value` into a map-valued field, creating the map on
    /// first use
    ///
    /// Labels and annotations are the canonical callers.
    ///
    /// # Errors
    /// [`ModelError::NotAnObject`] if the field exists with a non-object
    /// value.
    pub fn insert_entry(
        &mut self,
        field: &str,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Result<(), ModelError> {
        let slot = self
            .values
            .entry(field.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        match slot.as_object_mut() {
            Some(map) => {
                map.insert(key.into(), value.into());
                Ok(())
            }
            None => Err(ModelError::NotAnObject {
                kind: self.kind.name(),
                field: field.to_string(),
            }),
        }
    }

    /// Remove `key` from a map-valued field
    ///
    /// Returns whether the key was present. An absent field is an absent
    /// key, not an error.
    ///
    /// # Errors
    /// [`ModelError::NotAnObject`] if the field exists with a non-object
    /// value.
    pub fn remove_entry(&mut self, field: &str, key: &str) -> Result<bool, ModelError> {
        match self.values.get_mut(field) {
            None => Ok(false),
            Some(slot) => match slot.as_object_mut() {
                Some(map) => Ok(map.remove(key).is_some()),
                None => Err(ModelError::NotAnObject {
                    kind: self.kind.name(),
                    field: field.to_string(),
                }),
            },
        }
    }

    /// Append a value to a list-valued field, creating the list on first
    /// use
    ///
    /// # Errors
    /// [`ModelError::NotAnArray`] if the field exists with a non-array
    /// value.
    pub fn push_entry(&mut self, field: &str, value: impl Into<Value>) -> Result<(), ModelError> {
        let slot = self
            .values
            .entry(field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        match slot.as_array_mut() {
            Some(items) => {
                items.push(value.into());
                Ok(())
            }
            None => Err(ModelError::NotAnArray {
                kind: self.kind.name(),
                field: field.to_string(),
            }),
        }
    }

    /// First child of `kind`, created empty if absent
    pub fn get_or_create_child(&mut self, kind: Kind) -> &mut Node {
        let position = self.children.iter().position(|c| c.kind == kind);
        let index = match position {
            Some(index) => index,
            None => {
                self.children.push(Node::new(kind));
                self.children.len() - 1
            }
        };
        &mut self.children[index]
    }

    /// Append a child node, regardless of existing siblings of its kind
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// All direct children
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct children of one kind
    pub fn children_of_kind(&self, kind: Kind) -> impl Iterator<Item = &Node> {
        self.children.iter().filter(move |c| c.kind == kind)
    }

    /// Collect every subtree node of `kind`, this node included
    ///
    /// Traversal does not descend past a match; a node of kind K never
    /// contains another K in this model.
    pub fn nodes_of_kind_mut(&mut self, kind: Kind) -> Vec<&mut Node> {
        let mut out = Vec::new();
        collect_mut(self, kind, &mut out);
        out
    }

    /// Serialize this node to a JSON value
    ///
    /// Values appear in insertion order. Children group under their
    /// kind's field: list kinds as arrays, singleton kinds as the single
    /// child's object.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let mut out = Map::new();
        for (field, value) in &self.values {
            out.insert(field.clone(), value.clone());
        }

        let mut grouped: IndexMap<Kind, Vec<Value>> = IndexMap::new();
        for child in &self.children {
            grouped.entry(child.kind).or_default().push(child.to_value());
        }
        for (kind, mut values) in grouped {
            let value = if kind.is_list() {
                Value::Array(values)
            } else {
                values.swap_remove(0)
            };
            out.insert(kind.field().to_string(), value);
        }

        Value::Object(out)
    }
}

fn collect_mut<'a>(node: &'a mut Node, kind: Kind, out: &mut Vec<&'a mut Node>) {
    if node.kind == kind {
        out.push(node);
        return;
    }
    for child in &mut node.children {
        collect_mut(child, kind, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SERVICE: Kind = Kind::new("Service", "service");
    const METADATA: Kind = Kind::new("ObjectMeta", "metadata");
    const POD_SPEC: Kind = Kind::new("PodSpec", "spec");
    const CONTAINER: Kind = Kind::list("Container", "containers");

    #[test]
    fn named_node_carries_owner_name() {
        let node = Node::named(SERVICE, "frontend");
        assert_eq!(node.name(), Some("frontend"));
        assert_eq!(Node::new(SERVICE).name(), None);
    }

    #[test]
    fn set_and_get_values() {
        let mut node = Node::new(METADATA);
        node.set("name", "frontend");
        assert_eq!(node.get_str("name"), Some("frontend"));
        assert_eq!(node.get("missing"), None);
    }

    #[test]
    fn insert_entry_creates_map() {
        let mut node = Node::new(METADATA);
        node.insert_entry("labels", "app", "frontend").unwrap();
        node.insert_entry("labels", "tier", "web").unwrap();
        assert_eq!(
            node.get("labels"),
            Some(&json!({"app": "frontend", "tier": "web"}))
        );
    }

    #[test]
    fn insert_entry_rejects_non_object() {
        let mut node = Node::new(METADATA);
        node.set("labels", "oops");
        let err = node.insert_entry("labels", "app", "frontend").unwrap_err();
        assert_eq!(
            err,
            ModelError::NotAnObject {
                kind: "ObjectMeta",
                field: "labels".to_string(),
            }
        );
    }

    #[test]
    fn remove_entry_reports_presence() {
        let mut node = Node::new(METADATA);
        node.insert_entry("annotations", "temp", "x").unwrap();
        assert!(node.remove_entry("annotations", "temp").unwrap());
        assert!(!node.remove_entry("annotations", "temp").unwrap());
        assert!(!node.remove_entry("labels", "app").unwrap());
    }

    #[test]
    fn push_entry_appends() {
        let mut node = Node::new(CONTAINER);
        node.push_entry("env", json!({"name": "A", "value": "1"}))
            .unwrap();
        node.push_entry("env", json!({"name": "B", "value": "2"}))
            .unwrap();
        assert_eq!(node.get("env").unwrap().as_array().unwrap().len(), 2);
    }

    #[test]
    fn get_or_create_child_is_idempotent() {
        let mut node = Node::new(SERVICE);
        node.get_or_create_child(METADATA).set("name", "frontend");
        let meta = node.get_or_create_child(METADATA);
        assert_eq!(meta.get_str("name"), Some("frontend"));
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn nodes_of_kind_collects_subtree() {
        let mut node = Node::named(SERVICE, "frontend");
        node.get_or_create_child(METADATA);
        let spec = node.get_or_create_child(POD_SPEC);
        spec.add_child(Node::new(CONTAINER));
        spec.add_child(Node::new(CONTAINER));

        assert_eq!(node.nodes_of_kind_mut(CONTAINER).len(), 2);
        assert_eq!(node.nodes_of_kind_mut(METADATA).len(), 1);
        assert_eq!(node.nodes_of_kind_mut(SERVICE).len(), 1);
    }

    #[test]
    fn to_value_groups_children() {
        let mut node = Node::named(SERVICE, "frontend");
        node.set("kind", "Service");
        node.get_or_create_child(METADATA).set("name", "frontend");
        let spec = node.get_or_create_child(POD_SPEC);
        let mut first = Node::new(CONTAINER);
        first.set("image", "nginx");
        spec.add_child(first);
        spec.add_child(Node::new(CONTAINER));

        assert_eq!(
            node.to_value(),
            json!({
                "kind": "Service",
                "metadata": {"name": "frontend"},
                "spec": {"containers": [{"image": "nginx"}, {}]},
            })
        );
    }
}
