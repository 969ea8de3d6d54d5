//! Generation session
//!
//! Provides [`Session`], the per-run owner of registry and project
//! metadata that drives resolve-then-apply.

use crate::apply::{self, Report};
use crate::decorator::Decorator;
use crate::error::EngineError;
use crate::registry::Registry;
use crate::schedule::Schedule;
use adorn_model::ResourceTree;
use adorn_project::Project;

/// One generation run: registry in, mutated tree out
///
/// A session is consumed by [`Session::generate`]. Independent runs in
/// the same process each own their session and tree, so they may proceed
/// in parallel; within a run everything is strictly sequential.
#[derive(Debug)]
pub struct Session {
    registry: Registry,
    project: Project,
}

impl Session {
    /// Create a session for a project
    #[inline]
    #[must_use]
    pub fn new(project: Project) -> Self {
        Self {
            registry: Registry::new(),
            project,
        }
    }

    /// Register a decorator, collapsing duplicates
    ///
    /// Returns `false` when an equal instance was already registered.
    pub fn register(&mut self, decorator: impl Decorator + 'static) -> bool {
        self.registry.register(decorator)
    }

    /// The registry accumulated so far
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Resolve the schedule and apply it to `tree`
    ///
    /// Fail-fast: a configuration or cycle error returns before any
    /// mutation; a mutation error aborts mid-run without rollback and
    /// the caller must discard the tree.
    ///
    /// # Errors
    /// Any [`EngineError`]; see [`Schedule::resolve`] and the
    /// application rules.
    pub fn generate(self, tree: &mut ResourceTree) -> Result<Report, EngineError> {
        let schedule = Schedule::resolve(self.registry)?;
        tracing::info!(decorators = schedule.len(), "resolved decorator schedule");
        tracing::debug!(order = ?schedule.kind_sequence(), "application order");

        let report = apply::apply_schedule(&schedule, tree, &self.project)?;
        tracing::info!(
            applied = report.applied,
            skipped = report.skipped,
            "generation complete"
        );
        Ok(report)
    }
}
