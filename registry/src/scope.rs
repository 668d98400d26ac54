//! Registration scopes.

use buildscript_core::{ClassName, NodeId, TypeKey};
use std::collections::HashMap;
use std::fmt;

/// Where a descriptor can be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScopeId {
    /// The owning document, keyed by class name.
    Document,
    /// A container element (a project, a `<sequential>`), keyed by element
    /// identifier.
    Container(NodeId),
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScopeId::Document => f.write_str("document"),
            ScopeId::Container(node) => write!(f, "container {}", node),
        }
    }
}

/// The types usable as nested elements inside one container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeRegistry {
    bindings: HashMap<TypeKey, ClassName>,
}

impl ScopeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `class_name`.
    ///
    /// A class is bound under at most one key; an older binding of the same
    /// class is dropped. Returns the class previously bound to `key`, if it
    /// was a different one.
    pub fn bind(&mut self, key: TypeKey, class_name: ClassName) -> Option<ClassName> {
        self.bindings
            .retain(|k, c| *c != class_name || *k == key);
        match self.bindings.insert(key, class_name.clone()) {
            Some(prev) if prev != class_name => Some(prev),
            _ => None,
        }
    }

    /// Drop every binding of `class_name`. Returns whether one existed.
    pub fn unbind_class(&mut self, class_name: &ClassName) -> bool {
        let before = self.bindings.len();
        self.bindings.retain(|_, c| c != class_name);
        self.bindings.len() != before
    }

    pub fn lookup(&self, key: &TypeKey) -> Option<&ClassName> {
        self.bindings.get(key)
    }

    pub fn contains_class(&self, class_name: &ClassName) -> bool {
        self.bindings.values().any(|c| c == class_name)
    }

    /// All bindings, sorted by key.
    pub fn bindings(&self) -> Vec<(TypeKey, ClassName)> {
        let mut all: Vec<_> = self
            .bindings
            .iter()
            .map(|(k, c)| (k.clone(), c.clone()))
            .collect();
        all.sort();
        all
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
