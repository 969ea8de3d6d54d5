//! Annotation decorators

use crate::kinds;
use adorn_engine::{
    ApplyContext, Decorator, DecoratorKind, Fingerprint, MutationError, Propagation, Target,
};
use adorn_model::{Kind, Node};

/// Adds an annotation to resource metadata
#[derive(Debug, Clone)]
pub struct AddAnnotationDecorator {
    target: Target,
    key: String,
    value: String,
}

impl AddAnnotationDecorator {
    /// Kind tag for constraint declarations
    pub const KIND: DecoratorKind = DecoratorKind::new("AddAnnotation");

    /// Add `key = value` to every resource
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: Target::Any,
            key: key.into(),
            value: value.into(),
        }
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
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Decorator for AddAnnotationDecorator {
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
        Fingerprint::new(Self::KIND)
            .with_param(format!("{:?}", self.target))
            .with_param(self.key.as_str())
            .with_param(self.value.as_str())
    }

    fn apply<'d>(
        &'d self,
        node: &mut Node,
        _ctx: &ApplyContext<'_>,
    ) -> Result<Propagation<'d>, MutationError> {
        node.insert_entry("annotations", self.key.as_str(), self.value.as_str())?;
        Ok(Propagation::done())
    }
}

/// Removes an annotation from resource metadata
///
/// Scheduled after every annotation-adding decorator that declares so;
/// an absent key is simply nothing to remove.
#[derive(Debug, Clone)]
pub struct RemoveAnnotationDecorator {
    target: Target,
    key: String,
}

impl RemoveAnnotationDecorator {
    /// Kind tag for constraint declarations
    pub const KIND: DecoratorKind = DecoratorKind::new("RemoveAnnotation");

    /// Remove `key` from every resource
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            target: Target::Any,
            key: key.into(),
        }
    }

    /// Restrict to the resource named `name`
    #[must_use]
    pub fn for_resource(mut self, name: impl Into<String>) -> Self {
        self.target = Target::named(name);
        self
    }
}

impl Decorator for RemoveAnnotationDecorator {
    fn kind(&self) -> DecoratorKind {
        Self::KIND
    }

    fn node_kind(&self) -> Kind {
        kinds::METADATA
    }

    fn target(&self) -> Target {
        self.target.clone()
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(Self::KIND)
            .with_param(format!("{:?}", self.target))
            .with_param(self.key.as_str())
    }

    fn apply<'d>(
        &'d self,
        node: &mut Node,
        _ctx: &ApplyContext<'_>,
    ) -> Result<Propagation<'d>, MutationError> {
        node.remove_entry("annotations", &self.key)?;
        Ok(Propagation::done())
    }
}
