//! Configuration for macro synchronization.

use crate::{ConfigError, ConfigResult};
use buildscript_core::AttributeType;

/// Kind used in generated class names (`AntMacroDef[name]`).
pub const DEFAULT_KIND: &str = "AntMacroDef";

/// Configuration for macro synchronization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Kind prefix of generated class names
    pub kind: String,
    /// Tag of declaration elements
    pub declaration_tag: String,
    /// Tag of children that declare attributes
    pub attribute_tag: String,
    /// Tag of children that declare nested elements
    pub element_tag: String,
    /// Type given to every declared attribute
    pub attribute_type: AttributeType,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            kind: DEFAULT_KIND.to_string(),
            declaration_tag: "macrodef".to_string(),
            attribute_tag: "attribute".to_string(),
            element_tag: "element".to_string(),
            attribute_type: AttributeType::String,
        }
    }
}

impl SyncConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn with_declaration_tag(mut self, tag: impl Into<String>) -> Self {
        self.declaration_tag = tag.into();
        self
    }

    pub fn with_attribute_tag(mut self, tag: impl Into<String>) -> Self {
        self.attribute_tag = tag.into();
        self
    }

    pub fn with_element_tag(mut self, tag: impl Into<String>) -> Self {
        self.element_tag = tag.into();
        self
    }

    pub fn with_attribute_type(mut self, ty: AttributeType) -> Self {
        self.attribute_type = ty;
        self
    }

    /// Check that the configuration can tell declarations and their children
    /// apart.
    pub fn validate(&self) -> ConfigResult<()> {
        let required = [
            ("kind", &self.kind),
            ("declaration_tag", &self.declaration_tag),
            ("attribute_tag", &self.attribute_tag),
            ("element_tag", &self.element_tag),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Blank(field));
            }
        }
        if self.attribute_tag == self.element_tag {
            return Err(ConfigError::SameTags(self.attribute_tag.clone()));
        }
        Ok(())
    }
}
