//! Shared test plumbing: a configurable decorator and tree fixtures.

use crate::decorator::{
    ApplyContext, Decorator, DecoratorKind, Fingerprint, Propagation, Target,
};
use crate::error::MutationError;
use adorn_model::{Kind, Node, ResourceTree};
use adorn_project::{Coordinates, Project};

pub(crate) const WIDGET: Kind = Kind::new("Widget", "widget");
pub(crate) const METADATA: Kind = Kind::new("ObjectMeta", "metadata");
pub(crate) const CONFIG: Kind = Kind::new("Config", "config");

/// What a [`TestDecorator`] does to its matched node.
#[derive(Debug, Clone)]
pub(crate) enum Action {
    Noop,
    Set {
        field: &'static str,
        value: &'static str,
    },
    Insert {
        field: &'static str,
        key: &'static str,
        value: &'static str,
    },
    Remove {
        field: &'static str,
        key: &'static str,
    },
    Append {
        field: &'static str,
        value: &'static str,
    },
    Descend {
        kind: Kind,
        field: &'static str,
        value: &'static str,
    },
    Fail,
}

/// Fully configurable decorator for engine tests.
#[derive(Debug, Clone)]
pub(crate) struct TestDecorator {
    kind: DecoratorKind,
    node_kind: Kind,
    target: Target,
    before: Vec<DecoratorKind>,
    after: Vec<DecoratorKind>,
    param: Option<&'static str>,
    action: Action,
}

impl TestDecorator {
    pub(crate) fn new(tag: &'static str) -> Self {
        Self {
            kind: DecoratorKind::new(tag),
            node_kind: METADATA,
            target: Target::Any,
            before: Vec::new(),
            after: Vec::new(),
            param: None,
            action: Action::Noop,
        }
    }

    pub(crate) fn on(mut self, node_kind: Kind) -> Self {
        self.node_kind = node_kind;
        self
    }

    pub(crate) fn targeting(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    pub(crate) fn before(mut self, tag: &'static str) -> Self {
        self.before.push(DecoratorKind::new(tag));
        self
    }

    pub(crate) fn after(mut self, tag: &'static str) -> Self {
        self.after.push(DecoratorKind::new(tag));
        self
    }

    pub(crate) fn param(mut self, param: &'static str) -> Self {
        self.param = Some(param);
        self
    }

    pub(crate) fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }
}

impl Decorator for TestDecorator {
    fn kind(&self) -> DecoratorKind {
        self.kind
    }

    fn node_kind(&self) -> Kind {
        self.node_kind
    }

    fn target(&self) -> Target {
        self.target.clone()
    }

    fn before(&self) -> Vec<DecoratorKind> {
        self.before.clone()
    }

    fn after(&self) -> Vec<DecoratorKind> {
        self.after.clone()
    }

    fn fingerprint(&self) -> Fingerprint {
        let fingerprint = Fingerprint::new(self.kind);
        match self.param {
            Some(param) => fingerprint.with_param(param),
            None => fingerprint,
        }
    }

    fn apply<'d>(
        &'d self,
        node: &mut Node,
        _ctx: &ApplyContext<'_>,
    ) -> Result<Propagation<'d>, MutationError> {
        match &self.action {
            Action::Noop => Ok(Propagation::done()),
            Action::Set { field, value } => {
                node.set(*field, *value);
                Ok(Propagation::done())
            }
            Action::Insert { field, key, value } => {
                node.insert_entry(field, *key, *value)?;
                Ok(Propagation::done())
            }
            Action::Remove { field, key } => {
                node.remove_entry(field, key)?;
                Ok(Propagation::done())
            }
            Action::Append { field, value } => {
                node.push_entry(field, *value)?;
                Ok(Propagation::done())
            }
            Action::Descend { kind, field, value } => {
                Ok(Propagation::descend(*kind, move |child| {
                    child.set(*field, *value);
                    Ok(())
                }))
            }
            Action::Fail => Err(MutationError::missing("test structure")),
        }
    }
}

/// A tree of named Widget resources, each with an empty metadata child.
pub(crate) fn widget_tree(names: &[&str]) -> ResourceTree {
    let mut tree = ResourceTree::new();
    for name in names {
        let mut widget = Node::named(WIDGET, *name);
        widget.get_or_create_child(METADATA);
        tree.add(widget);
    }
    tree
}

pub(crate) fn project() -> Project {
    Project::new(Coordinates::new("io.example", "widget", "1.0.0"))
}
