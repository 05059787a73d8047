//! Model manifest errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors loading a [`ManifestModel`](crate::ManifestModel).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The manifest file could not be read.
    #[error("Failed to read manifest '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing failed.
    #[error("JSON manifest parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("YAML manifest parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension does not map to a supported format.
    #[error("Unsupported manifest format for '{}': expected .json, .yaml or .yml", path.display())]
    UnsupportedFormat { path: PathBuf },
}
