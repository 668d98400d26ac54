//! Build-script Registry
//!
//! Type descriptors and the document-owned store they live in. The store is
//! keyed by class name: registering a class that is already present replaces
//! it in place, and unregistering a class drops it from every scope it was
//! mirrored into.

pub mod builtin;
mod builder;
mod registry;
mod scope;
mod types;

pub use builder::{DescriptorBuilder, RegistryError, RegistryResult};
pub use registry::{RegistrySnapshot, TypeStore};
pub use scope::{ScopeId, ScopeRegistry};
pub use types::*;
