//! Build-script document tree
//!
//! The model never parses documents itself. Hosts expose their parsed tree
//! through [`DocumentTree`]; [`ElementTree`] is an in-memory implementation
//! for tests and hosts without a tree of their own.

mod document;
mod error;
mod tree;

pub use document::{DocumentTree, NodeKind};
pub use error::{TreeError, TreeResult};
pub use tree::{Element, ElementTree};
