//! DescriptorBuilder for constructing type descriptors.

use crate::TypeDescriptor;
use buildscript_core::{AttributeType, ClassName, TypeKey};
use std::collections::HashMap;
use thiserror::Error;

/// Errors that can occur during descriptor construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Duplicate attribute '{attr}' on {class_name}")]
    DuplicateAttribute { class_name: ClassName, attr: String },

    #[error("Duplicate nested element '{key}' on {class_name}")]
    DuplicateNested { class_name: ClassName, key: TypeKey },

    #[error("Blank class name for type '{0}'")]
    BlankClassName(TypeKey),
}

/// Result type for registry construction.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Builder for a type descriptor.
#[derive(Debug)]
pub struct DescriptorBuilder {
    key: TypeKey,
    class_name: ClassName,
    is_task: bool,
    is_all_tasks_container: bool,
    attributes: Vec<(String, AttributeType)>,
    nested: Vec<(TypeKey, ClassName)>,
}

impl DescriptorBuilder {
    pub fn new(key: impl Into<TypeKey>, class_name: impl Into<ClassName>) -> Self {
        Self {
            key: key.into(),
            class_name: class_name.into(),
            is_task: false,
            is_all_tasks_container: false,
            attributes: Vec::new(),
            nested: Vec::new(),
        }
    }

    /// Add an attribute. The name is stored lower-cased.
    pub fn attr(mut self, name: &str, ty: AttributeType) -> Self {
        self.attributes.push((name.to_lowercase(), ty));
        self
    }

    /// Add a nested element type.
    pub fn nested(mut self, key: impl Into<TypeKey>, class_name: impl Into<ClassName>) -> Self {
        self.nested.push((key.into(), class_name.into()));
        self
    }

    /// Mark as a task.
    pub fn task(mut self) -> Self {
        self.is_task = true;
        self
    }

    /// Mark as accepting any task as a nested element.
    pub fn all_tasks_container(mut self) -> Self {
        self.is_all_tasks_container = true;
        self
    }

    /// Finish building the descriptor.
    pub fn build(self) -> RegistryResult<TypeDescriptor> {
        if self.class_name.as_str().trim().is_empty() {
            return Err(RegistryError::BlankClassName(self.key));
        }

        let mut attributes = HashMap::with_capacity(self.attributes.len());
        for (name, ty) in self.attributes {
            if attributes.contains_key(&name) {
                return Err(RegistryError::DuplicateAttribute {
                    class_name: self.class_name,
                    attr: name,
                });
            }
            attributes.insert(name, ty);
        }

        let mut nested = HashMap::with_capacity(self.nested.len());
        for (key, class_name) in self.nested {
            if nested.contains_key(&key) {
                return Err(RegistryError::DuplicateNested {
                    class_name: self.class_name,
                    key,
                });
            }
            nested.insert(key, class_name);
        }

        Ok(TypeDescriptor {
            key: self.key,
            class_name: self.class_name,
            is_task: self.is_task,
            is_all_tasks_container: self.is_all_tasks_container,
            attributes,
            nested,
            defining_node: None,
        })
    }
}
