//! Node kinds of the Kubernetes-flavored resource model
//!
//! The engine is schema-agnostic; these constants are the schema this
//! decorator set mutates. Singleton kinds serialize as one object under
//! their field, list kinds as an array.

use adorn_model::Kind;

/// Service resource root
pub const SERVICE: Kind = Kind::new("Service", "service");

/// Deployment resource root
pub const DEPLOYMENT: Kind = Kind::new("Deployment", "deployment");

/// Resource metadata (labels, annotations, name)
pub const METADATA: Kind = Kind::new("ObjectMeta", "metadata");

/// Service spec
pub const SERVICE_SPEC: Kind = Kind::new("ServiceSpec", "spec");

/// Deployment spec
pub const DEPLOYMENT_SPEC: Kind = Kind::new("DeploymentSpec", "spec");

/// Container within a workload spec
pub const CONTAINER: Kind = Kind::list("Container", "containers");

/// Port exposed by a service spec
pub const SERVICE_PORT: Kind = Kind::list("ServicePort", "ports");
