//! Tree construction errors.

use buildscript_core::NodeId;
use thiserror::Error;

/// Errors that can occur while editing an [`ElementTree`](crate::ElementTree).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// Node not found.
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    /// Text nodes are leaves.
    #[error("Cannot add children to text node {0}")]
    TextHasNoChildren(NodeId),
}

/// Result type for tree operations.
pub type TreeResult<T> = Result<T, TreeError>;
