// error.rs — Error types for the context subsystem.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading workspace context files.
///
/// The tolerant loaders collapse these to "no context"; the type preserves
/// the cause for logging at the strict read layer.
#[derive(Debug, Error)]
pub enum ContextError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The repo mapping document failed to parse.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
