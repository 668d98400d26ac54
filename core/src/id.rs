//! Identity types for elements of a build-script document.
//!
//! Identifiers are handed out by the host document tree and are:
//! - Unique within their document
//! - Stable for the lifetime of the element
//! - Opaque to the model

use std::fmt;

/// Unique identifier for an element in a document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Create a new NodeId from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}
