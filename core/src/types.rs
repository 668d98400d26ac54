//! Type keys, attribute types and element roles.

use std::fmt;

/// The identifier a type is used under inside a document: an element name,
/// optionally qualified by a namespace URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeKey {
    /// Element name.
    pub name: String,
    /// Namespace URI, if the type lives outside the default namespace.
    pub namespace: Option<String>,
}

impl TypeKey {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    pub fn with_namespace(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{}:{}", ns, self.name),
            None => f.write_str(&self.name),
        }
    }
}

impl From<&str> for TypeKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Type of an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AttributeType {
    /// Free-form text. Every macro attribute is a string.
    #[default]
    String,
    /// Whole number.
    Integer,
    /// `true`/`false`, `yes`/`no`, `on`/`off`.
    Boolean,
    /// Reference to an element id.
    Reference,
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AttributeType::String => "String",
            AttributeType::Integer => "Integer",
            AttributeType::Boolean => "Boolean",
            AttributeType::Reference => "Reference",
        };
        f.write_str(s)
    }
}

/// Role an element plays in a build script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Project,
    Target,
    Task,
    /// A declaration that defines a new task type.
    MacroDef,
    /// Any other structured element.
    Other,
}
