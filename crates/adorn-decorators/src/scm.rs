//! Version-control annotations
//!
//! Decorators fed by the project metadata provider. Both tolerate
//! missing version-control info by skipping silently: a build outside a
//! checkout still generates a valid artifact, just without these
//! annotations.

use crate::annotations::RemoveAnnotationDecorator;
use crate::kinds;
use adorn_engine::{
    ApplyContext, Decorator, DecoratorKind, Fingerprint, MutationError, Propagation, Target,
};
use adorn_model::{Kind, Node};

/// Well-known annotation keys written by this module
pub mod keys {
    /// Commit id the artifact was generated from
    pub const COMMIT_ID: &str = "app.adorn.dev/commit-id";

    /// Remote repository the artifact was generated from
    pub const VCS_URL: &str = "app.adorn.dev/vcs-url";
}

/// Annotates resources with the commit id of the build
///
/// Identity covers the annotation key only: however many discovery paths
/// produce this decorator, one commit annotation results.
#[derive(Debug, Clone)]
pub struct AddCommitIdAnnotationDecorator {
    target: Target,
    annotation_key: String,
}

impl AddCommitIdAnnotationDecorator {
    /// Kind tag for constraint declarations
    pub const KIND: DecoratorKind = DecoratorKind::new("AddCommitIdAnnotation");

    /// Annotate every resource under [`keys::COMMIT_ID`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: Target::Any,
            annotation_key: keys::COMMIT_ID.to_string(),
        }
    }

    /// Use a custom annotation key
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.annotation_key = key.into();
        self
    }

    /// Restrict to the resource named `name`
    #[must_use]
    pub fn for_resource(mut self, name: impl Into<String>) -> Self {
        self.target = Target::named(name);
        self
    }

    /// Annotation key this instance writes
    #[inline]
    #[must_use]
    pub fn annotation_key(&self) -> &str {
        &self.annotation_key
    }
}

impl Default for AddCommitIdAnnotationDecorator {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorator for AddCommitIdAnnotationDecorator {
    fn kind(&self) -> DecoratorKind {
        Self::KIND
    }

    fn node_kind(&self) -> Kind {
        kinds::METADATA
    }

    fn target(&self) -> Target {
        self.target.clone()
    }

    fn before(&self) -> Vec<DecoratorKind> {
        vec![RemoveAnnotationDecorator::KIND]
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(Self::KIND).with_param(self.annotation_key.as_str())
    }

    fn apply<'d>(
        &'d self,
        node: &mut Node,
        ctx: &ApplyContext<'_>,
    ) -> Result<Propagation<'d>, MutationError> {
        match ctx.project().commit() {
            Some(commit) => {
                node.insert_entry("annotations", self.annotation_key.as_str(), commit)?;
            }
            None => {
                tracing::debug!(owner = ctx.owner(), "no commit id available, skipping");
            }
        }
        Ok(Propagation::done())
    }
}

/// Annotates resources with the remote repository URI
#[derive(Debug, Clone)]
pub struct AddVcsUrlAnnotationDecorator {
    target: Target,
    annotation_key: String,
}

impl AddVcsUrlAnnotationDecorator {
    /// Kind tag for constraint declarations
    pub const KIND: DecoratorKind = DecoratorKind::new("AddVcsUrlAnnotation");

    /// Annotate every resource under [`keys::VCS_URL`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            target: Target::Any,
            annotation_key: keys::VCS_URL.to_string(),
        }
    }

    /// Use a custom annotation key
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.annotation_key = key.into();
        self
    }

    /// Restrict to the resource named `name`
    #[must_use]
    pub fn for_resource(mut self, name: impl Into<String>) -> Self {
        self.target = Target::named(name);
        self
    }
}

impl Default for AddVcsUrlAnnotationDecorator {
    fn default() -> Self {
        Self::new()
    }
}

impl Decorator for AddVcsUrlAnnotationDecorator {
    fn kind(&self) -> DecoratorKind {
        Self::KIND
    }

    fn node_kind(&self) -> Kind {
        kinds::METADATA
    }

    fn target(&self) -> Target {
        self.target.clone()
    }

    fn before(&self) -> Vec<DecoratorKind> {
        vec![RemoveAnnotationDecorator::KIND]
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(Self::KIND).with_param(self.annotation_key.as_str())
    }

    fn apply<'d>(
        &'d self,
        node: &mut Node,
        ctx: &ApplyContext<'_>,
    ) -> Result<Propagation<'d>, MutationError> {
        match ctx.project().scm_uri() {
            Some(uri) => {
                node.insert_entry("annotations", self.annotation_key.as_str(), uri)?;
            }
            None => {
                tracing::debug!(owner = ctx.owner(), "no vcs uri available, skipping");
            }
        }
        Ok(Propagation::done())
    }
}
