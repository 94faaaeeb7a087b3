use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors raised while loading a schema document.
///
/// Callers can tell "file missing" apart from "file malformed or invalid";
/// every other diagnostic detail lives in the message.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The config file path does not exist.
    #[error("input config file does not exist: {0}")]
    FileNotFound(PathBuf),
    /// The document is not well-formed JSON or violates the schema contract.
    #[error("invalid schema: {0}")]
    Parse(String),
}

/// Convenience alias for results returned by the core crate.
pub type Result<T> = std::result::Result<T, SchemaError>;
