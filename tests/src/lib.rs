//! Integration test support for the build-script model.
//!
//! Builds element trees for macro declarations and checks what a
//! [`Document`](buildscript_macrodef::Document) registered for them.


use std::sync::Once;

/// Route `tracing` output to the test harness. Safe to call from every test.
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub mod prelude {
    pub use crate::assertion::Expect;
    pub use crate::error::{CheckError, CheckResult};
    pub use crate::fixture::{MacroBuilder, MacroNodes, Script};
    pub use crate::init_tracing;
    pub use buildscript_core::{AttributeType, ClassName, NodeId, TypeKey};
    pub use buildscript_macrodef::{Document, SyncConfig};
    pub use buildscript_registry::ScopeId;
    pub use buildscript_tree::{DocumentTree, Element, ElementTree, NodeKind};
}
