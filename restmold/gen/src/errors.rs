//! Error types for the model scaffolder.

use thiserror::Error;

/// Errors that can occur while scaffolding a model file.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// The requested name cannot become a Rust type name.
    #[error("Invalid model name '{name}': {reason}")]
    InvalidName {
        /// The name as given on the command line.
        name: String,
        /// Explanation of why the name is rejected.
        reason: String,
    },

    /// The rendered stub is not valid Rust.
    #[error("Code generation failed: {0}")]
    CodeGenError(String),

    /// Failed to write output file
    #[error("Failed to write output file '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
