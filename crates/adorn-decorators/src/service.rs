//! Service decorators

use crate::kinds;
use adorn_engine::{
    ApplyContext, Decorator, DecoratorKind, Fingerprint, MutationError, Propagation, Target,
};
use adorn_model::{Kind, Node};

/// Exposes a named port on matched services
///
/// Two-phase: matches the service resource itself, then propagates into
/// its spec to append the port entry. The spec child is resolved by the
/// engine, created if the skeleton left it out.
#[derive(Debug, Clone)]
pub struct AddPortDecorator {
    target: Target,
    name: String,
    port: u16,
}

impl AddPortDecorator {
    /// Kind tag for constraint declarations
    pub const KIND: DecoratorKind = DecoratorKind::new("AddPort");

    /// Expose `port` under `name` on every service
    #[must_use]
    pub fn new(name: impl Into<String>, port: u16) -> Self {
        Self {
            target: Target::Any,
            name: name.into(),
            port,
        }
    }

    /// Restrict to the resource named `name`
    #[must_use]
    pub fn for_resource(mut self, name: impl Into<String>) -> Self {
        self.target = Target::named(name);
        self
    }
}

impl Decorator for AddPortDecorator {
    fn kind(&self) -> DecoratorKind {
        Self::KIND
    }

    fn node_kind(&self) -> Kind {
        kinds::SERVICE
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
        _node: &mut Node,
        _ctx: &ApplyContext<'_>,
    ) -> Result<Propagation<'d>, MutationError> {
        Ok(Propagation::descend(kinds::SERVICE_SPEC, move |spec| {
            let mut port = Node::new(kinds::SERVICE_PORT);
            port.set("name", self.name.as_str());
            port.set("port", self.port);
            spec.add_child(port);
            Ok(())
        }))
    }
}
