//! Adorn Resource Model
//!
//! Schema-agnostic mutable builder tree for generated configuration
//! artifacts (Kubernetes-style resource manifests).
//!
//! # Core Concepts
//!
//! - [`Kind`]: tag naming a node family and the field it serializes under
//! - [`Node`]: one builder node - scalar values plus typed child nodes
//! - [`ResourceTree`]: the root collection of resource nodes for one run
//!
//! The tree is opaque to the resolution engine except for three
//! capabilities: get-or-create a child of a kind, collect subtree nodes of
//! a kind, and read the owner name of a resource. Everything else here is
//! convenience for decorator authors.
//!
//! # Example
//!
//! ```rust,ignore
//! use adorn_model::{Kind, Node, ResourceTree};
//!
//! const SERVICE: Kind = Kind::new("Service", "service");
//! const METADATA: Kind = Kind::new("ObjectMeta", "metadata");
//!
//! let mut svc = Node::named(SERVICE, "frontend");
//! svc.get_or_create_child(METADATA);
//!
//! let mut tree = ResourceTree::new();
//! tree.add(svc);
//! ```

#![warn(unreachable_pub)]

mod kind;
mod node;
mod tree;

pub use kind::Kind;
pub use node::{ModelError, Node};
pub use tree::ResourceTree;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
