//! Adorn Standard Decorators
//!
//! The decorator set shipped with the generator: metadata labels and
//! annotations, version-control annotations fed by project metadata,
//! container environment variables, service ports, replica counts.
//!
//! # Example
//!
//! ```rust,ignore
//! use adorn_decorators::{resources, AddLabelDecorator, AddCommitIdAnnotationDecorator};
//! use adorn_engine::Session;
//!
//! let mut tree = adorn_model::ResourceTree::new();
//! tree.add(resources::service("frontend"));
//!
//! let mut session = Session::new(project);
//! session.register(AddLabelDecorator::new("app", "frontend"));
//! session.register(AddCommitIdAnnotationDecorator::new());
//! session.generate(&mut tree)?;
//! ```
//!
//! Every decorator here applies to any resource by default; call
//! `for_resource` to pin one to a single named resource.

#![warn(unreachable_pub)]

mod annotations;
mod labels;
mod scm;
mod service;
mod workload;

pub mod kinds;
pub mod resources;

pub use annotations::{AddAnnotationDecorator, RemoveAnnotationDecorator};
pub use labels::{AddLabelDecorator, RemoveLabelDecorator};
pub use scm::{keys, AddCommitIdAnnotationDecorator, AddVcsUrlAnnotationDecorator};
pub use service::AddPortDecorator;
pub use workload::{AddEnvVarDecorator, SetReplicasDecorator};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
