//! Rebuild and teardown of macro-defined types.
//!
//! Everything here runs with the owning document's lock held.

use crate::SyncConfig;
use buildscript_core::{ClassName, NodeId, TypeKey};
use buildscript_registry::{ScopeId, TypeDescriptor, TypeStore};
use buildscript_tree::{DocumentTree, NodeKind};
use std::collections::HashMap;
use tracing::{debug, trace, warn};

/// What a declaration contributed on its last rebuild.
#[derive(Debug, Clone)]
pub(crate) struct HeldDefinition {
    pub(crate) descriptor: TypeDescriptor,
    /// The project the type was registered in, if any.
    pub(crate) project: Option<NodeId>,
    /// The container the type was made invocable in, if any.
    pub(crate) sequential: Option<NodeId>,
}

/// Mutable state of a document.
#[derive(Debug, Default)]
pub(crate) struct DocumentState {
    pub(crate) store: TypeStore,
    pub(crate) definitions: HashMap<NodeId, HeldDefinition>,
    pub(crate) target_template: Option<TypeDescriptor>,
    pub(crate) generation: u64,
}

/// The declared name of a node, if it has a usable one.
pub(crate) fn declared_name<T: DocumentTree + ?Sized>(tree: &T, node: NodeId) -> Option<&str> {
    tree.name(node).filter(|name| !name.trim().is_empty())
}

impl DocumentState {
    /// The descriptor a declaration currently defines, revalidated against
    /// the store by class name.
    pub(crate) fn current(&self, node: NodeId) -> Option<&TypeDescriptor> {
        let held = self.definitions.get(&node)?;
        Some(
            self.store
                .get(&held.descriptor.class_name)
                .unwrap_or(&held.descriptor),
        )
    }

    /// Derive the declaration's type from its children and register it.
    pub(crate) fn rebuild<T: DocumentTree + ?Sized>(
        &mut self,
        tree: &T,
        node: NodeId,
        config: &SyncConfig,
    ) -> Option<ClassName> {
        let Some(name) = declared_name(tree, node) else {
            if self.definitions.contains_key(&node) {
                trace!(%node, "declaration lost its name");
                self.teardown(node);
            }
            return None;
        };

        let class_name = ClassName::macro_class(&config.kind, name);
        let project = tree.enclosing_project(node);
        let sequential = tree.first_child_of_kind(node, NodeKind::TasksContainer);
        let previous_nested = self.release_stale(node, &class_name, project, sequential);
        let existing = self.store.get(&class_name).cloned();

        let mut attributes = HashMap::new();
        let mut nested = HashMap::new();
        for &child in tree.children(node) {
            if !tree.kind(child).is_some_and(NodeKind::is_structured) {
                continue;
            }
            let (Some(child_name), Some(tag)) = (declared_name(tree, child), tree.tag(child)) else {
                continue;
            };

            if tag == config.attribute_tag {
                trace!(class = %class_name, attr = child_name, "attribute");
                attributes.insert(child_name.to_lowercase(), config.attribute_type);
            } else if tag == config.element_tag {
                let nested_class = class_name.nested(child_name);
                let seed = self.store.get(&nested_class).cloned().or_else(|| {
                    self.target_template
                        .as_ref()
                        .map(TypeDescriptor::from_template)
                });
                let Some(mut nested_def) = seed else {
                    warn!(class = %nested_class, "no target template, nested element skipped");
                    continue;
                };

                let key = TypeKey::new(child_name);
                nested_def.key = key.clone();
                nested_def.class_name = nested_class.clone();
                nested_def.is_task = false;
                nested_def.defining_node = Some(child);
                self.store.register(ScopeId::Document, nested_def);
                nested.insert(key, nested_class);
            }
        }

        let key = TypeKey::new(name);
        let descriptor = match existing {
            Some(mut reused) => {
                reused.key = key;
                reused.class_name = class_name.clone();
                reused.is_task = true;
                reused.is_all_tasks_container = false;
                reused.attributes = attributes;
                reused.nested = nested;
                reused.defining_node = Some(node);
                reused
            }
            None => TypeDescriptor {
                key,
                class_name: class_name.clone(),
                is_task: true,
                is_all_tasks_container: false,
                attributes,
                nested,
                defining_node: Some(node),
            },
        };

        if let Some(project) = project {
            self.store
                .register(ScopeId::Container(project), descriptor.clone());
        }

        // Nested types the declaration no longer has.
        for stale in previous_nested {
            if !descriptor.nested.values().any(|c| *c == stale) {
                self.store.unregister(&stale);
            }
        }

        // The macro can invoke itself and its nested elements from its body.
        if let Some(sequential) = sequential {
            let scope = ScopeId::Container(sequential);
            self.store.register(scope, descriptor.clone());
            for nested_class in descriptor.nested.values() {
                if let Some(nested_def) = self.store.get(nested_class).cloned() {
                    self.store.register(scope, nested_def);
                }
            }
        }

        debug!(
            %node,
            class = %class_name,
            attributes = descriptor.attributes.len(),
            nested = descriptor.nested.len(),
            "rebuilt macro definition"
        );
        self.definitions.insert(
            node,
            HeldDefinition {
                descriptor,
                project,
                sequential,
            },
        );
        Some(class_name)
    }

    /// Tear down what the declaration held if it no longer matches the type
    /// about to be built: another class, or other containers. Returns the
    /// nested classes of a definition that is kept.
    fn release_stale(
        &mut self,
        node: NodeId,
        class_name: &ClassName,
        project: Option<NodeId>,
        sequential: Option<NodeId>,
    ) -> Vec<ClassName> {
        let Some(held) = self.definitions.get(&node) else {
            return Vec::new();
        };
        if held.descriptor.class_name == *class_name
            && held.project == project
            && held.sequential == sequential
        {
            return self
                .current(node)
                .map(|def| def.nested.values().cloned().collect())
                .unwrap_or_default();
        }
        debug!(
            %node,
            held = %held.descriptor.class_name,
            class = %class_name,
            "declaration changed shape, releasing held definition"
        );
        self.teardown(node);
        Vec::new()
    }

    /// Unregister everything the declaration's last rebuild registered and
    /// mark the document's caches stale.
    pub(crate) fn teardown(&mut self, node: NodeId) -> Option<HeldDefinition> {
        let held = self.definitions.remove(&node);
        if let Some(held) = &held {
            let current = self
                .store
                .get(&held.descriptor.class_name)
                .cloned()
                .unwrap_or_else(|| held.descriptor.clone());
            for nested_class in current.nested.values() {
                self.store.unregister(nested_class);
            }
            self.store.unregister(&current.class_name);
            debug!(%node, class = %current.class_name, "tore down macro definition");
        }
        self.generation += 1;
        held
    }
}
