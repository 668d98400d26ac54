//! Type descriptor definitions.

use buildscript_core::{AttributeType, ClassName, NodeId, TypeKey};
use std::collections::HashMap;

/// A named, reusable schema: the attributes and nested elements an element
/// of this type accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
    /// Element identifier the type is used under.
    pub key: TypeKey,
    /// Unique identity within a document.
    pub class_name: ClassName,
    /// Whether elements of this type can be invoked as tasks.
    pub is_task: bool,
    /// Whether elements of this type accept any task as a nested element.
    pub is_all_tasks_container: bool,
    /// Attribute types by lower-cased attribute name.
    pub attributes: HashMap<String, AttributeType>,
    /// Class names of nested element types by element identifier.
    pub nested: HashMap<TypeKey, ClassName>,
    /// The element whose declaration produced this type, if user-defined.
    pub defining_node: Option<NodeId>,
}

impl TypeDescriptor {
    pub fn new(key: TypeKey, class_name: ClassName) -> Self {
        Self {
            key,
            class_name,
            is_task: false,
            is_all_tasks_container: false,
            attributes: HashMap::new(),
            nested: HashMap::new(),
            defining_node: None,
        }
    }

    /// Copy a template; the copy owns its own attribute and nested maps.
    pub fn from_template(template: &TypeDescriptor) -> Self {
        template.clone()
    }

    /// Get an attribute type by name. Names are matched case-insensitively.
    pub fn get_attr(&self, name: &str) -> Option<AttributeType> {
        self.attributes.get(&name.to_lowercase()).copied()
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Class name registered for a nested element.
    pub fn nested_class_name(&self, key: &TypeKey) -> Option<&ClassName> {
        self.nested.get(key)
    }
}
