//! Adorn Resolution Engine
//!
//! Turns an unordered bag of decorators into one deterministic,
//! constraint-satisfying mutation sequence and applies it to a resource
//! model tree.
//!
//! # Core Concepts
//!
//! - [`Decorator`]: unit of mutation with targeting and ordering metadata
//! - [`Registry`]: deduplicated decorator collection for one run
//! - [`ConstraintGraph`]: directed graph over decorator kinds from
//!   before/after declarations
//! - [`Schedule`]: topological order with deterministic tie-breaking
//! - [`Session`]: resolve-then-apply driver for one generation run
//!
//! # Example
//!
//! ```rust,ignore
//! use adorn_engine::Session;
//!
//! let mut session = Session::new(project);
//! session.register(AddLabelDecorator::new("app", "frontend"));
//! session.register(RemoveAnnotationDecorator::new("temp"));
//!
//! let report = session.generate(&mut tree)?;
//! println!("{} decorators applied", report.applied);
//! ```
//!
//! The final artifact never depends on registration order: equal
//! registries schedule identically, whatever order discovery produced
//! them in.

#![warn(unreachable_pub)]

mod apply;
mod decorator;
mod error;
mod graph;
mod registry;
mod schedule;
mod session;

#[cfg(test)]
mod test_support;

// Re-exports
pub use apply::Report;
pub use decorator::{
    ApplyContext, ChildMutation, Decorator, DecoratorKind, Fingerprint, Propagation, Target,
};
pub use error::{EngineError, MutationError};
pub use graph::ConstraintGraph;
pub use registry::Registry;
pub use schedule::Schedule;
pub use session::Session;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
