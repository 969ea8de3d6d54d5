//! Label decorators

use crate::kinds;
use adorn_engine::{
    ApplyContext, Decorator, DecoratorKind, Fingerprint, MutationError, Propagation, Target,
};
use adorn_model::{Kind, Node};

/// Adds a label to resource metadata
///
/// Runs before any label removal so that an explicit removal always
/// wins, whatever order discovery registered the two.
#[derive(Debug, Clone)]
pub struct AddLabelDecorator {
    target: Target,
    key: String,
    value: String,
}

impl AddLabelDecorator {
    /// Kind tag for constraint declarations
    pub const KIND: DecoratorKind = DecoratorKind::new("AddLabel");

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
}

impl Decorator for AddLabelDecorator {
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
        vec![RemoveLabelDecorator::KIND]
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
        node.insert_entry("labels", self.key.as_str(), self.value.as_str())?;
        Ok(Propagation::done())
    }
}

/// Removes a label from resource metadata
#[derive(Debug, Clone)]
pub struct RemoveLabelDecorator {
    target: Target,
    key: String,
}

impl RemoveLabelDecorator {
    /// Kind tag for constraint declarations
    pub const KIND: DecoratorKind = DecoratorKind::new("RemoveLabel");

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

impl Decorator for RemoveLabelDecorator {
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
        node.remove_entry("labels", &self.key)?;
        Ok(Propagation::done())
    }
}
