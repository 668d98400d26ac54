//! Common error types for the build-script model.

use thiserror::Error;

/// Errors that can occur when interpreting a class name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClassNameError {
    /// The string does not have the `Kind[name]` shape.
    #[error("Not a generated class name: {0}")]
    Malformed(String),

    /// A generated class name needs a non-blank kind.
    #[error("Blank kind in class name: {0}")]
    BlankKind(String),
}

/// Result type for class name operations.
pub type ClassNameResult<T> = Result<T, ClassNameError>;
