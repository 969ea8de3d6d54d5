//! Resource skeletons
//!
//! Starting points a generation run decorates: a named resource with its
//! metadata and spec in place, nothing else.

use crate::kinds;
use adorn_model::Node;

/// Service skeleton: metadata with the resource name plus an empty spec
#[must_use]
pub fn service(name: &str) -> Node {
    let mut resource = Node::named(kinds::SERVICE, name);
    resource.set("apiVersion", "v1");
    resource.set("kind", "Service");
    resource.get_or_create_child(kinds::METADATA).set("name", name);
    resource.get_or_create_child(kinds::SERVICE_SPEC);
    resource
}

/// Deployment skeleton: metadata, spec, and one container named after
/// the resource
#[must_use]
pub fn deployment(name: &str) -> Node {
    let mut resource = Node::named(kinds::DEPLOYMENT, name);
    resource.set("apiVersion", "apps/v1");
    resource.set("kind", "Deployment");
    resource.get_or_create_child(kinds::METADATA).set("name", name);

    let spec = resource.get_or_create_child(kinds::DEPLOYMENT_SPEC);
    let mut container = Node::new(kinds::CONTAINER);
    container.set("name", name);
    spec.add_child(container);
    resource
}
