//! Schedule application
//!
//! Walks an ordered schedule over the resource model tree: resolve
//! candidate nodes per decorator, mutate, propagate into children when
//! asked. Mutations are visible to every later decorator - there is no
//! batching or snapshotting, which is why scheduling order is the
//! correctness contract.

use crate::decorator::{ApplyContext, Decorator, Propagation};
use crate::error::{EngineError, MutationError};
use crate::schedule::Schedule;
use adorn_model::ResourceTree;
use adorn_project::Project;

/// Outcome counters for one generation run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Decorators that mutated at least one node
    pub applied: usize,
    /// Decorators with zero matching target nodes (no-ops)
    pub skipped: usize,
}

pub(crate) fn apply_schedule(
    schedule: &Schedule,
    tree: &mut ResourceTree,
    project: &Project,
) -> Result<Report, EngineError> {
    let mut report = Report::default();

    for decorator in schedule.iter() {
        let touched =
            apply_one(decorator, tree, project).map_err(|source| EngineError::Mutation {
                decorator: decorator.kind(),
                source,
            })?;

        if touched == 0 {
            tracing::debug!(
                decorator = %decorator.kind(),
                node_kind = %decorator.node_kind(),
                "no matching target nodes, skipping"
            );
            report.skipped += 1;
        } else {
            tracing::debug!(decorator = %decorator.kind(), nodes = touched, "applied");
            report.applied += 1;
        }
    }

    Ok(report)
}

/// Apply one decorator to every candidate node, returning how many it
/// touched
fn apply_one(
    decorator: &dyn Decorator,
    tree: &mut ResourceTree,
    project: &Project,
) -> Result<usize, MutationError> {
    let target = decorator.target();
    let node_kind = decorator.node_kind();
    let mut touched = 0;

    for resource in tree.resources_mut() {
        if !target.matches(resource.name()) {
            continue;
        }
        let owner = resource.name().unwrap_or_default().to_string();
        let ctx = ApplyContext::new(project, &owner);

        for node in resource.nodes_of_kind_mut(node_kind) {
            match decorator.apply(node, &ctx)? {
                Propagation::Done => {}
                Propagation::Descend { kind, mutate } => {
                    mutate(node.get_or_create_child(kind))?;
                }
            }
            touched += 1;
        }
    }

    Ok(touched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decorator::Target;
    use crate::registry::Registry;
    use crate::test_support::{widget_tree, Action, TestDecorator, CONFIG, METADATA};
    use serde_json::json;

    fn run(registry: Registry, tree: &mut ResourceTree) -> Result<Report, EngineError> {
        let schedule = Schedule::resolve(registry).unwrap();
        apply_schedule(&schedule, tree, &crate::test_support::project())
    }

    #[test]
    fn wildcard_decorator_visits_every_resource() {
        let mut tree = widget_tree(&["frontend", "backend"]);
        let mut registry = Registry::new();
        registry.register(TestDecorator::new("AddLabel").with_action(Action::Insert {
            field: "labels",
            key: "app",
            value: "demo",
        }));

        let report = run(registry, &mut tree).unwrap();
        assert_eq!(report, Report { applied: 1, skipped: 0 });
        for resource in tree.resources() {
            let meta = resource.children_of_kind(METADATA).next().unwrap();
            assert_eq!(meta.get("labels"), Some(&json!({"app": "demo"})));
        }
    }

    #[test]
    fn named_decorator_visits_only_its_resource() {
        let mut tree = widget_tree(&["frontend", "backend"]);
        let mut registry = Registry::new();
        registry.register(
            TestDecorator::new("AddLabel")
                .targeting(Target::named("frontend"))
                .with_action(Action::Insert {
                    field: "labels",
                    key: "app",
                    value: "demo",
                }),
        );

        run(registry, &mut tree).unwrap();

        let frontend = tree.find(crate::test_support::WIDGET, "frontend").unwrap();
        let backend = tree.find(crate::test_support::WIDGET, "backend").unwrap();
        let meta = |node: &adorn_model::Node| {
            node.children_of_kind(METADATA).next().unwrap().get("labels").cloned()
        };
        assert_eq!(meta(frontend), Some(json!({"app": "demo"})));
        assert_eq!(meta(backend), None);
    }

    #[test]
    fn absent_node_kind_is_a_noop() {
        let mut tree = widget_tree(&["frontend"]);
        let before = tree.clone();

        let mut registry = Registry::new();
        registry.register(
            TestDecorator::new("SetMode")
                .on(CONFIG)
                .with_action(Action::Set {
                    field: "mode",
                    value: "fast",
                }),
        );

        let report = run(registry, &mut tree).unwrap();
        assert_eq!(report, Report { applied: 0, skipped: 1 });
        assert_eq!(tree, before);
    }

    #[test]
    fn propagation_reaches_created_child() {
        let mut tree = widget_tree(&["frontend"]);
        let mut registry = Registry::new();
        registry.register(TestDecorator::new("Tune").with_action(Action::Descend {
            kind: CONFIG,
            field: "mode",
            value: "fast",
        }));

        run(registry, &mut tree).unwrap();

        let widget = tree.find(crate::test_support::WIDGET, "frontend").unwrap();
        let meta = widget.children_of_kind(METADATA).next().unwrap();
        let config = meta.children_of_kind(CONFIG).next().unwrap();
        assert_eq!(config.get_str("mode"), Some("fast"));
    }

    #[test]
    fn later_decorators_observe_earlier_mutations() {
        let mut tree = widget_tree(&["frontend"]);
        let mut registry = Registry::new();
        // Removal is constrained to run after the addition it undoes
        registry.register(
            TestDecorator::new("Remove")
                .after("Add")
                .with_action(Action::Remove {
                    field: "labels",
                    key: "temp",
                }),
        );
        registry.register(TestDecorator::new("Add").with_action(Action::Insert {
            field: "labels",
            key: "temp",
            value: "x",
        }));

        run(registry, &mut tree).unwrap();

        let widget = tree.find(crate::test_support::WIDGET, "frontend").unwrap();
        let meta = widget.children_of_kind(METADATA).next().unwrap();
        assert_eq!(meta.get("labels"), Some(&json!({})));
    }

    #[test]
    fn mutation_error_aborts_and_names_decorator() {
        let mut tree = widget_tree(&["frontend"]);
        let mut registry = Registry::new();
        registry.register(TestDecorator::new("Broken").with_action(Action::Fail));

        let err = run(registry, &mut tree).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Mutation { decorator, .. }
                if decorator == crate::decorator::DecoratorKind::new("Broken")
        ));
    }

    #[test]
    fn failure_does_not_roll_back_earlier_mutations() {
        let mut tree = widget_tree(&["frontend"]);
        let mut registry = Registry::new();
        registry.register(TestDecorator::new("Add").with_action(Action::Insert {
            field: "labels",
            key: "app",
            value: "demo",
        }));
        registry.register(TestDecorator::new("Broken").with_action(Action::Fail));

        assert!(run(registry, &mut tree).is_err());

        let widget = tree.find(crate::test_support::WIDGET, "frontend").unwrap();
        let meta = widget.children_of_kind(METADATA).next().unwrap();
        assert_eq!(meta.get("labels"), Some(&json!({"app": "demo"})));
    }
}
