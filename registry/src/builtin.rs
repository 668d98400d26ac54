//! Built-in type templates.

use crate::{DescriptorBuilder, RegistryResult, TypeDescriptor};
use buildscript_core::AttributeType;

/// Class name of the standard `<target>` type.
pub const TARGET_CLASS_NAME: &str = "org.apache.tools.ant.Target";

/// Attributes accepted by `<target>`.
pub const TARGET_ATTRIBUTES: &[&str] = &[
    "name",
    "depends",
    "if",
    "unless",
    "description",
    "extensionof",
    "onmissingextensionpoint",
];

/// The `<target>` definition used to seed types of macro nested elements.
pub fn target_template() -> RegistryResult<TypeDescriptor> {
    TARGET_ATTRIBUTES
        .iter()
        .fold(
            DescriptorBuilder::new("target", TARGET_CLASS_NAME).all_tasks_container(),
            |builder, attr| builder.attr(attr, AttributeType::String),
        )
        .build()
}
