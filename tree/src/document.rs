//! The read-only tree capability the model consumes.

use buildscript_core::NodeId;

/// Coarse classification of a tree element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// The enclosing project; its scope receives task declarations.
    Project,
    /// A container that runs its children in order (e.g. `<sequential>`).
    TasksContainer,
    /// Any other structured element.
    Element,
    /// Character data, comments and other unstructured content.
    Text,
}

impl NodeKind {
    /// Whether elements of this kind carry a tag, a name and children.
    pub fn is_structured(self) -> bool {
        !matches!(self, NodeKind::Text)
    }
}

/// Read access to a parsed build-script document.
///
/// Lookups of nodes unknown to the tree return `None` or an empty slice.
pub trait DocumentTree {
    /// Kind of a node.
    fn kind(&self, node: NodeId) -> Option<NodeKind>;

    /// Declared name (the `name` attribute) of a node.
    fn name(&self, node: NodeId) -> Option<&str>;

    /// Tag of a node's source element.
    fn tag(&self, node: NodeId) -> Option<&str>;

    /// Children of a node, in document order.
    fn children(&self, node: NodeId) -> &[NodeId];

    /// Parent of a node.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// The closest ancestor of kind [`NodeKind::Project`].
    fn enclosing_project(&self, node: NodeId) -> Option<NodeId> {
        let mut current = self.parent(node);
        while let Some(id) = current {
            if self.kind(id) == Some(NodeKind::Project) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    /// The first direct child of the given kind.
    fn first_child_of_kind(&self, node: NodeId, kind: NodeKind) -> Option<NodeId> {
        self.children(node)
            .iter()
            .copied()
            .find(|&child| self.kind(child) == Some(kind))
    }
}
