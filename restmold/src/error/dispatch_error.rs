//! Route resolution errors.

use thiserror::Error;

/// Errors raised while resolving an operation into a request.
///
/// All of these surface before the transport is touched.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The invoked name has no entry in the model's route map.
    #[error(
        "Call to undefined operation {model}::{operation}(). This usually means the route map is empty or the operation was never declared"
    )]
    UnknownOperation {
        /// Name of the model the client was built from.
        model: String,
        /// The operation name that was invoked.
        operation: String,
    },

    /// A query placeholder named by the template has no supplied value.
    #[error("Operation '{operation}' has no value for query placeholder '{placeholder}'")]
    MissingQueryValue {
        operation: String,
        placeholder: String,
    },

    /// The path template cannot satisfy the requested substitution.
    #[error("Malformed path template '{path}' for operation '{operation}': {reason}")]
    MalformedTemplate {
        operation: String,
        path: String,
        reason: String,
    },

    /// The route body could not be encoded as JSON.
    #[error("Failed to serialize request body: {0}")]
    BodySerialization(#[from] serde_json::Error),
}

impl DispatchError {
    /// Returns the operation name this error refers to, if any.
    pub fn operation(&self) -> Option<&str> {
        match self {
            Self::UnknownOperation { operation, .. }
            | Self::MissingQueryValue { operation, .. }
            | Self::MalformedTemplate { operation, .. } => Some(operation),
            Self::BodySerialization(_) => None,
        }
    }
}
