//! A document and the lock that guards its type registry.

use crate::sync::{declared_name, DocumentState};
use crate::{ConfigResult, SyncConfig};
use buildscript_core::{ClassName, ElementRole, NodeId, TypeKey};
use buildscript_registry::{builtin, RegistrySnapshot, ScopeId, TypeDescriptor};
use buildscript_tree::{DocumentTree, NodeKind};
use parking_lot::Mutex;
use tracing::debug;

/// One build-script document's type registry.
///
/// All reads and writes go through a single lock, so no caller ever observes
/// a descriptor halfway through a rebuild. Share it behind an `Arc`.
#[derive(Debug)]
pub struct Document {
    config: SyncConfig,
    state: Mutex<DocumentState>,
}

impl Document {
    /// Create a document seeded with the standard `<target>` template.
    pub fn new(config: SyncConfig) -> ConfigResult<Self> {
        config.validate()?;
        let state = DocumentState {
            target_template: builtin::target_template().ok(),
            ..DocumentState::default()
        };
        Ok(Self {
            config,
            state: Mutex::new(state),
        })
    }

    /// Replace the template nested element types are seeded from.
    pub fn with_target_template(mut self, template: Option<TypeDescriptor>) -> Self {
        self.state.get_mut().target_template = template;
        self
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    // ==================== Synchronization ====================

    /// Rebuild the type a declaration defines from its current children.
    ///
    /// Returns the class name registered, or `None` for a nameless
    /// declaration.
    pub fn invalidate<T: DocumentTree + ?Sized>(&self, tree: &T, node: NodeId) -> Option<ClassName> {
        self.state.lock().rebuild(tree, node, &self.config)
    }

    /// Unregister everything a declaration registered on its last rebuild.
    pub fn teardown(&self, node: NodeId) {
        self.state.lock().teardown(node);
    }

    /// Teardown followed by rebuild, as one step. This is what the host's
    /// cache-clearing pass calls for every declaration it reaches.
    pub fn clear_caches<T: DocumentTree + ?Sized>(&self, tree: &T, node: NodeId) -> Option<ClassName> {
        let mut state = self.state.lock();
        state.teardown(node);
        state.rebuild(tree, node, &self.config)
    }

    /// Clear the caches of every given declaration under one lock.
    pub fn refresh_all<T: DocumentTree + ?Sized>(&self, tree: &T, declarations: &[NodeId]) {
        let mut state = self.state.lock();
        for &node in declarations {
            state.teardown(node);
        }
        for &node in declarations {
            state.rebuild(tree, node, &self.config);
        }
        debug!(count = declarations.len(), "refreshed declarations");
    }

    /// Forget a declaration that was removed from the tree.
    pub fn remove_declaration(&self, node: NodeId) {
        let mut state = self.state.lock();
        if let Some(sequential) = state.teardown(node).and_then(|held| held.sequential) {
            state.store.remove_container(sequential);
        }
    }

    // ==================== Lookups ====================

    /// The type a declaration currently defines.
    pub fn macro_definition(&self, node: NodeId) -> Option<TypeDescriptor> {
        self.state.lock().current(node).cloned()
    }

    /// A descriptor stored in the document, by class name.
    pub fn base_type(&self, class_name: &ClassName) -> Option<TypeDescriptor> {
        self.state.lock().store.get(class_name).cloned()
    }

    pub fn scope_types(&self, scope: ScopeId) -> Vec<(TypeKey, ClassName)> {
        self.state.lock().store.scope_types(scope)
    }

    /// Resolve an element identifier through a scope chain, innermost first.
    pub fn resolve_nested(&self, chain: &[ScopeId], key: &TypeKey) -> Option<TypeDescriptor> {
        self.state.lock().store.resolve(chain, key).cloned()
    }

    /// Resolve an element used at `node`, searching the containers enclosing
    /// it and then the document.
    pub fn resolve_element<T: DocumentTree + ?Sized>(
        &self,
        tree: &T,
        node: NodeId,
        key: &TypeKey,
    ) -> Option<TypeDescriptor> {
        let chain = Self::scope_chain(tree, node);
        self.resolve_nested(&chain, key)
    }

    /// The scopes visible from `node`: enclosing containers innermost first,
    /// then the document.
    pub fn scope_chain<T: DocumentTree + ?Sized>(tree: &T, node: NodeId) -> Vec<ScopeId> {
        let mut chain = Vec::new();
        let mut current = Some(node);
        while let Some(id) = current {
            if matches!(
                tree.kind(id),
                Some(NodeKind::Project | NodeKind::TasksContainer)
            ) {
                chain.push(ScopeId::Container(id));
            }
            current = tree.parent(id);
        }
        chain.push(ScopeId::Document);
        chain
    }

    /// A consistent copy of the whole registry.
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.state.lock().store.clone()
    }

    /// Incremented every time a declaration's caches are cleared.
    pub fn generation(&self) -> u64 {
        self.state.lock().generation
    }

    /// Declarations that currently hold a definition, sorted.
    pub fn declarations(&self) -> Vec<NodeId> {
        let mut nodes: Vec<_> = self.state.lock().definitions.keys().copied().collect();
        nodes.sort();
        nodes
    }

    // ==================== Element queries ====================

    /// Whether `node` is a macro declaration.
    pub fn is_declaration<T: DocumentTree + ?Sized>(&self, tree: &T, node: NodeId) -> bool {
        tree.tag(node) == Some(self.config.declaration_tag.as_str())
    }

    pub fn role<T: DocumentTree + ?Sized>(&self, tree: &T, node: NodeId) -> ElementRole {
        if self.is_declaration(tree, node) {
            return ElementRole::MacroDef;
        }
        match tree.kind(node) {
            Some(NodeKind::Project) => ElementRole::Project,
            Some(NodeKind::TasksContainer) => ElementRole::Task,
            _ if tree.tag(node) == Some("target") => ElementRole::Target,
            _ => ElementRole::Other,
        }
    }

    /// The class name a declaration generates, whether or not it is built.
    pub fn display_name<T: DocumentTree + ?Sized>(&self, tree: &T, node: NodeId) -> Option<ClassName> {
        declared_name(tree, node).map(|name| ClassName::macro_class(&self.config.kind, name))
    }
}
