// error.rs — Error types for the discovery subsystem.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading discovery inputs.
///
/// Resolution itself never surfaces these — every detector degrades a failed
/// read to "no contribution". The type exists for the strict read paths that
/// the tolerant loaders wrap, so the cause is preserved for logging.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A JSON document failed to parse.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A TOML document failed to parse.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}
