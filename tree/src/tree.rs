//! In-memory element tree.

use crate::{DocumentTree, NodeKind, TreeError, TreeResult};
use buildscript_core::NodeId;
use std::collections::HashMap;

/// Tag given to text nodes.
const TEXT_TAG: &str = "#text";

/// Description of an element to insert.
#[derive(Debug, Clone)]
pub struct Element {
    pub kind: NodeKind,
    pub tag: String,
    pub name: Option<String>,
}

impl Element {
    pub fn new(kind: NodeKind, tag: impl Into<String>) -> Self {
        Self {
            kind,
            tag: tag.into(),
            name: None,
        }
    }

    /// A plain structured element.
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::new(NodeKind::Element, tag)
    }

    pub fn text() -> Self {
        Self::new(NodeKind::Text, TEXT_TAG)
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

#[derive(Debug)]
struct ElementData {
    element: Element,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An editable document tree.
#[derive(Debug)]
pub struct ElementTree {
    elements: HashMap<NodeId, ElementData>,
    next_id: u64,
    roots: Vec<NodeId>,
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree {
    pub fn new() -> Self {
        Self {
            elements: HashMap::new(),
            next_id: 1,
            roots: Vec::new(),
        }
    }

    fn alloc_id(&mut self) -> NodeId {
        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, element: Element, parent: Option<NodeId>) -> NodeId {
        let id = self.alloc_id();
        self.elements.insert(
            id,
            ElementData {
                element,
                parent,
                children: Vec::new(),
            },
        );
        id
    }

    /// Add a top-level element.
    pub fn add_root(&mut self, element: Element) -> NodeId {
        let id = self.insert(element, None);
        self.roots.push(id);
        id
    }

    /// Append a child to `parent`.
    pub fn add_child(&mut self, parent: NodeId, element: Element) -> TreeResult<NodeId> {
        match self.elements.get(&parent) {
            None => return Err(TreeError::NodeNotFound(parent)),
            Some(data) if !data.element.kind.is_structured() => {
                return Err(TreeError::TextHasNoChildren(parent))
            }
            Some(_) => {}
        }
        let id = self.insert(element, Some(parent));
        if let Some(data) = self.elements.get_mut(&parent) {
            data.children.push(id);
        }
        Ok(id)
    }

    /// Change (or clear) the declared name of a node.
    pub fn rename(&mut self, node: NodeId, name: Option<&str>) -> TreeResult<()> {
        let data = self
            .elements
            .get_mut(&node)
            .ok_or(TreeError::NodeNotFound(node))?;
        data.element.name = name.map(str::to_string);
        Ok(())
    }

    /// Remove a node and its whole subtree. Returns the removed ids, subtree
    /// root first.
    pub fn remove(&mut self, node: NodeId) -> TreeResult<Vec<NodeId>> {
        let parent = self
            .elements
            .get(&node)
            .ok_or(TreeError::NodeNotFound(node))?
            .parent;
        match parent {
            Some(parent) => {
                if let Some(data) = self.elements.get_mut(&parent) {
                    data.children.retain(|&c| c != node);
                }
            }
            None => self.roots.retain(|&r| r != node),
        }

        let mut removed = Vec::new();
        let mut stack = vec![node];
        while let Some(id) = stack.pop() {
            if let Some(data) = self.elements.remove(&id) {
                stack.extend(data.children.iter().rev().copied());
                removed.push(id);
            }
        }
        Ok(removed)
    }

    /// Top-level elements in insertion order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.elements.contains_key(&node)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl DocumentTree for ElementTree {
    fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.elements.get(&node).map(|d| d.element.kind)
    }

    fn name(&self, node: NodeId) -> Option<&str> {
        self.elements
            .get(&node)
            .and_then(|d| d.element.name.as_deref())
    }

    fn tag(&self, node: NodeId) -> Option<&str> {
        self.elements.get(&node).map(|d| d.element.tag.as_str())
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.elements
            .get(&node)
            .map(|d| d.children.as_slice())
            .unwrap_or(&[])
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.elements.get(&node).and_then(|d| d.parent)
    }
}
