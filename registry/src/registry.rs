//! The TypeStore - document-owned, class-keyed descriptor storage.

use crate::{ScopeId, ScopeRegistry, TypeDescriptor};
use buildscript_core::{ClassName, NodeId, TypeKey};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// A point-in-time copy of a document's store, safe to read without the
/// document lock.
pub type RegistrySnapshot = TypeStore;

#[derive(Debug, Clone)]
struct StoredType {
    descriptor: TypeDescriptor,
    /// Scopes the descriptor is registered in. Empty once every container
    /// binding of the class has been displaced.
    mirrors: BTreeSet<ScopeId>,
}

/// All descriptors known to one document, plus the container scopes they are
/// mirrored into.
///
/// The document owns every descriptor registered anywhere in it. Losing a
/// container binding to another class only unbinds that key; a descriptor
/// leaves the store through [`TypeStore::unregister`] alone.
#[derive(Debug, Clone, Default)]
pub struct TypeStore {
    /// Descriptors by class name.
    types: HashMap<ClassName, StoredType>,
    /// Container scopes by container element.
    containers: HashMap<NodeId, ScopeRegistry>,
}

impl TypeStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Lookups ====================

    /// Get a descriptor by class name.
    pub fn get(&self, class_name: &ClassName) -> Option<&TypeDescriptor> {
        self.types.get(class_name).map(|t| &t.descriptor)
    }

    pub fn contains(&self, class_name: &ClassName) -> bool {
        self.types.contains_key(class_name)
    }

    /// Scopes a class is registered in.
    pub fn mirrors(&self, class_name: &ClassName) -> Vec<ScopeId> {
        self.types
            .get(class_name)
            .map(|t| t.mirrors.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Whether a class is registered in a specific scope.
    pub fn is_registered_in(&self, class_name: &ClassName, scope: ScopeId) -> bool {
        self.types
            .get(class_name)
            .is_some_and(|t| t.mirrors.contains(&scope))
    }

    /// All class names, sorted.
    pub fn class_names(&self) -> Vec<ClassName> {
        let mut names: Vec<_> = self.types.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The bindings of a scope, sorted by key.
    ///
    /// For the document scope every descriptor registered directly in the
    /// document is listed under its own key.
    pub fn scope_types(&self, scope: ScopeId) -> Vec<(TypeKey, ClassName)> {
        match scope {
            ScopeId::Document => {
                let mut all: Vec<_> = self
                    .types
                    .iter()
                    .filter(|(_, t)| t.mirrors.contains(&ScopeId::Document))
                    .map(|(c, t)| (t.descriptor.key.clone(), c.clone()))
                    .collect();
                all.sort();
                all
            }
            ScopeId::Container(node) => self
                .containers
                .get(&node)
                .map(ScopeRegistry::bindings)
                .unwrap_or_default(),
        }
    }

    /// Resolve an element identifier through a chain of scopes, innermost
    /// first.
    ///
    /// The document scope is keyed by class name, so a key can match several
    /// of its descriptors; the smallest class name wins.
    pub fn resolve(&self, chain: &[ScopeId], key: &TypeKey) -> Option<&TypeDescriptor> {
        for scope in chain {
            let found = match scope {
                ScopeId::Container(node) => self
                    .containers
                    .get(node)
                    .and_then(|registry| registry.lookup(key))
                    .and_then(|class| self.get(class)),
                ScopeId::Document => self
                    .types
                    .iter()
                    .filter(|(_, t)| {
                        t.mirrors.contains(&ScopeId::Document) && t.descriptor.key == *key
                    })
                    .min_by(|(a, _), (b, _)| a.cmp(b))
                    .map(|(_, t)| &t.descriptor),
            };
            if found.is_some() {
                return found;
            }
        }
        None
    }

    // ==================== Mutation ====================

    /// Register a descriptor in a scope.
    ///
    /// If its class is already stored, the stored descriptor is replaced in
    /// place and keeps its other registrations.
    pub fn register(&mut self, scope: ScopeId, descriptor: TypeDescriptor) {
        let class_name = descriptor.class_name.clone();

        if let ScopeId::Container(node) = scope {
            let displaced = self
                .containers
                .entry(node)
                .or_default()
                .bind(descriptor.key.clone(), class_name.clone());
            if let Some(prev) = displaced {
                self.drop_mirror(&prev, scope);
            }
        }

        let stored_key = self
            .types
            .get(&class_name)
            .map(|t| t.descriptor.key.clone());
        match stored_key {
            Some(stored_key) => {
                if stored_key != descriptor.key {
                    let except = match scope {
                        ScopeId::Container(node) => Some(node),
                        ScopeId::Document => None,
                    };
                    self.rebind_containers(&class_name, &descriptor.key, except);
                }
                if let Some(stored) = self.types.get_mut(&class_name) {
                    stored.descriptor = descriptor;
                    stored.mirrors.insert(scope);
                }
            }
            None => {
                let mut mirrors = BTreeSet::new();
                mirrors.insert(scope);
                self.types.insert(
                    class_name.clone(),
                    StoredType {
                        descriptor,
                        mirrors,
                    },
                );
            }
        }

        debug!(class = %class_name, %scope, "registered type");
    }

    /// Remove a class from the store and from every scope it was mirrored
    /// into. Returns the removed descriptor.
    pub fn unregister(&mut self, class_name: &ClassName) -> Option<TypeDescriptor> {
        let stored = self.types.remove(class_name)?;
        for scope in &stored.mirrors {
            if let ScopeId::Container(node) = scope {
                self.unbind_container(*node, class_name);
            }
        }
        debug!(class = %class_name, mirrors = stored.mirrors.len(), "unregistered type");
        Some(stored.descriptor)
    }

    /// Forget a container scope entirely, e.g. after its element was removed.
    pub fn remove_container(&mut self, node: NodeId) {
        let Some(registry) = self.containers.remove(&node) else {
            return;
        };
        for (_, class_name) in registry.bindings() {
            self.drop_mirror(&class_name, ScopeId::Container(node));
        }
    }

    /// Keep other containers' bindings in step with a descriptor whose key
    /// changed.
    fn rebind_containers(
        &mut self,
        class_name: &ClassName,
        key: &TypeKey,
        except: Option<NodeId>,
    ) {
        let scopes: Vec<NodeId> = self
            .types
            .get(class_name)
            .map(|t| {
                t.mirrors
                    .iter()
                    .filter_map(|s| match s {
                        ScopeId::Container(n) if Some(*n) != except => Some(*n),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default();
        for node in scopes {
            if let Some(registry) = self.containers.get_mut(&node) {
                if let Some(prev) = registry.bind(key.clone(), class_name.clone()) {
                    self.drop_mirror(&prev, ScopeId::Container(node));
                }
            }
        }
    }

    fn drop_mirror(&mut self, class_name: &ClassName, scope: ScopeId) {
        if let Some(stored) = self.types.get_mut(class_name) {
            stored.mirrors.remove(&scope);
            debug!(class = %class_name, %scope, "type displaced");
        }
    }

    fn unbind_container(&mut self, node: NodeId, class_name: &ClassName) {
        if let Some(registry) = self.containers.get_mut(&node) {
            registry.unbind_class(class_name);
            if registry.is_empty() {
                self.containers.remove(&node);
            }
        }
    }
}
