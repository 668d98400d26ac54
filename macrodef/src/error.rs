//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when validating a [`SyncConfig`](crate::SyncConfig).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting is blank.
    #[error("Blank configuration value: {0}")]
    Blank(&'static str),

    /// Two tags that must be told apart are identical.
    #[error("Attribute and element tags are both '{0}'")]
    SameTags(String),
}

/// Result type for configuration.
pub type ConfigResult<T> = Result<T, ConfigError>;
