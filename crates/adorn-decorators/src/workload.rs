//! Workload decorators

use crate::kinds;
use adorn_engine::{
    ApplyContext, Decorator, DecoratorKind, Fingerprint, MutationError, Propagation, Target,
};
use adorn_model::{Kind, Node};
use serde_json::json;

/// Adds an environment variable to every container of matched workloads
#[derive(Debug, Clone)]
pub struct AddEnvVarDecorator {
    target: Target,
    name: String,
    value: String,
}

impl AddEnvVarDecorator {
    /// Kind tag for constraint declarations
    pub const KIND: DecoratorKind = DecoratorKind::new("AddEnvVar");

    /// Add `name = value` to every container
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target: Target::Any,
            name: name.into(),
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

impl Decorator for AddEnvVarDecorator {
    fn kind(&self) -> DecoratorKind {
        Self::KIND
    }

    fn node_kind(&self) -> Kind {
        kinds::CONTAINER
    }

    fn target(&self) -> Target {
        self.target.clone()
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(Self::KIND)
            .with_param(format!("{:?}", self.target))
            .with_param(self.name.as_str())
    }

    fn apply<'d>(
        &'d self,
        node: &mut Node,
        _ctx: &ApplyContext<'_>,
    ) -> Result<Propagation<'d>, MutationError> {
        node.push_entry("env", json!({"name": self.name, "value": self.value}))?;
        Ok(Propagation::done())
    }
}

/// Sets the replica count on matched deployment specs
///
/// Identity excludes the count: two discovered replica settings for the
/// same target are one configuration arriving twice, and the first
/// registration wins.
#[derive(Debug, Clone)]
pub struct SetReplicasDecorator {
    target: Target,
    replicas: u32,
}

impl SetReplicasDecorator {
    /// Kind tag for constraint declarations
    pub const KIND: DecoratorKind = DecoratorKind::new("SetReplicas");

    /// Set the replica count on every deployment
    #[must_use]
    pub fn new(replicas: u32) -> Self {
        Self {
            target: Target::Any,
            replicas,
        }
    }

    /// Restrict to the resource named `name`
    #[must_use]
    pub fn for_resource(mut self, name: impl Into<String>) -> Self {
        self.target = Target::named(name);
        self
    }
}

impl Decorator for SetReplicasDecorator {
    fn kind(&self) -> DecoratorKind {
        Self::KIND
    }

    fn node_kind(&self) -> Kind {
        kinds::DEPLOYMENT_SPEC
    }

    fn target(&self) -> Target {
        self.target.clone()
    }

    fn fingerprint(&self) -> Fingerprint {
        Fingerprint::new(Self::KIND).with_param(format!("{:?}", self.target))
    }

    fn apply<'d>(
        &'d self,
        node: &mut Node,
        _ctx: &ApplyContext<'_>,
    ) -> Result<Propagation<'d>, MutationError> {
        node.set("replicas", self.replicas);
        Ok(Propagation::done())
    }
}
