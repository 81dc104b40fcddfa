//! Error types for plugin-init.

use crate::plugin::interface::PluginError;
use thiserror::Error;

/// Result type alias for plugin-init operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside of plugin hooks.
///
/// Hook failures travel as [`PluginError`] and are returned unchanged by the
/// lifecycle functions; this type wraps them only when they cross into the
/// crate's wider API.
#[derive(Error, Debug)]
pub enum Error {
    // Plugin errors
    #[error(transparent)]
    Plugin(#[from] PluginError),

    // Configuration errors
    #[error("Logging initialization failed: {0}")]
    LoggingInit(String),

    // Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::SerializationError(err.to_string())
    }
}
