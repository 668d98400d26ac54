//! Generated class names.
//!
//! Class names are the identity under which type descriptors are stored and
//! compared. Macro declarations generate `Kind[name]`, and their nested
//! element types append `$nested`. These strings are compared byte for byte.

use crate::{ClassNameError, ClassNameResult};
use regex_lite::Regex;
use std::borrow::Borrow;
use std::fmt;
use std::sync::OnceLock;

/// Separator between a generated class name and a nested element name.
pub const NESTED_SEPARATOR: char = '$';

/// Identity of a type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassName(String);

impl ClassName {
    /// Wrap an arbitrary class name (e.g. a built-in `org.apache.tools.ant.Target`).
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Generate the class name of a declaration: `Kind[name]`.
    pub fn macro_class(kind: &str, name: &str) -> Self {
        let mut s = String::with_capacity(kind.len() + name.len() + 2);
        s.push_str(kind);
        s.push('[');
        s.push_str(name);
        s.push(']');
        Self(s)
    }

    /// Class name of a nested element type: `self$nested`.
    pub fn nested(&self, nested: &str) -> Self {
        let mut s = String::with_capacity(self.0.len() + nested.len() + 1);
        s.push_str(&self.0);
        s.push(NESTED_SEPARATOR);
        s.push_str(nested);
        Self(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is a nested class name of `parent`.
    pub fn is_nested_in(&self, parent: &ClassName) -> bool {
        self.0
            .strip_prefix(parent.as_str())
            .and_then(|rest| rest.strip_prefix(NESTED_SEPARATOR))
            .is_some_and(|rest| !rest.is_empty())
    }

    /// Decompose a generated class name.
    pub fn parse(&self) -> ClassNameResult<GeneratedClassName<'_>> {
        GeneratedClassName::parse(&self.0)
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClassName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ClassName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for ClassName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The parts of a generated class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedClassName<'a> {
    /// The declaration kind (e.g. `AntMacroDef`).
    pub kind: &'a str,
    /// The declared name.
    pub name: &'a str,
    /// The nested element name, if this names a nested type.
    pub nested: Option<&'a str>,
}

/// `Kind[name]` with an optional `$nested` suffix.
const GENERATED_PATTERN: &str = r"^([^\[\]]*)\[([^\]]*)\](?:\$(.+))?$";

fn generated_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(GENERATED_PATTERN).expect("class name pattern is valid"))
}

impl<'a> GeneratedClassName<'a> {
    /// Parse `Kind[name]` or `Kind[name]$nested`.
    pub fn parse(s: &'a str) -> ClassNameResult<Self> {
        let caps = generated_pattern()
            .captures(s)
            .ok_or_else(|| ClassNameError::Malformed(s.to_string()))?;
        let kind = caps.get(1).map_or("", |m| m.as_str());
        if kind.trim().is_empty() {
            return Err(ClassNameError::BlankKind(s.to_string()));
        }
        Ok(Self {
            kind,
            name: caps.get(2).map_or("", |m| m.as_str()),
            nested: caps.get(3).map(|m| m.as_str()),
        })
    }

    /// Rebuild the class name these parts describe.
    pub fn to_class_name(&self) -> ClassName {
        let base = ClassName::macro_class(self.kind, self.name);
        match self.nested {
            Some(nested) => base.nested(nested),
            None => base,
        }
    }
}
