//! Build-script Core Types
//!
//! This crate provides the foundational types shared by the build-script model:
//! - Identity types (NodeId for elements of a host document tree)
//! - Type identity (TypeKey, ClassName and its generated forms)
//! - Attribute types and element roles
//! - Common error types

mod class_name;
mod error;
mod id;
mod types;

pub use class_name::*;
pub use error::*;
pub use id::*;
pub use types::*;
