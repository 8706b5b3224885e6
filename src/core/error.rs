//! Error types for stacklink

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using stacklink's Error
pub type Result<T> = std::result::Result<T, Error>;

/// stacklink error types
///
/// Extraction itself never fails; these cover the conditions that abort a
/// batch run.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Catalog not found: {path}")]
    CatalogNotFound { path: PathBuf },

    #[error("Lookup table error: {message}")]
    TableError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
