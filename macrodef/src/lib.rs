//! Build-script Macro Definitions
//!
//! Keeps a document's type registry in step with its macro declarations.
//! Each declaration contributes a task type whose attributes and nested
//! elements come from its `<attribute>` and `<element>` children; the type is
//! rebuilt whenever the host clears the declaration's caches and torn down
//! when the declaration changes or disappears.

mod config;
mod document;
mod error;
mod sync;

pub use config::{SyncConfig, DEFAULT_KIND};
pub use document::Document;
pub use error::{ConfigError, ConfigResult};
