//! Top-level error type.

use super::{ClientError, ConfigError, DispatchError};
use thiserror::Error;

/// Top-level error type for all restmold operations.
///
/// ## Examples
///
/// ```rust,ignore
/// use restmold::RestError;
///
/// fn handle_error(err: RestError) {
///     match err {
///         RestError::Dispatch(e) => eprintln!("Bad call: {e}"),
///         RestError::Client(e) => eprintln!("Network error: {e}"),
///         RestError::Config(e) => eprintln!("Configuration error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// Route resolution failed before any request was sent.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// The transport failed to deliver the request or read the response.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// A model manifest could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl RestError {
    /// Returns `true` if the error happened before the transport was used.
    pub fn is_dispatch(&self) -> bool {
        matches!(self, Self::Dispatch(_))
    }

    /// Returns `true` if the transport call exceeded its timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_timeout())
    }

    /// HTTP status code carried by a transport error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dispatch_error() {
        let err: RestError = DispatchError::UnknownOperation {
            model: "Users".to_string(),
            operation: "show".to_string(),
        }
        .into();
        assert!(err.is_dispatch());
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_from_timeout() {
        let err: RestError = ClientError::Timeout { duration_ms: 50 }.into();
        assert!(err.is_timeout());
        assert!(!err.is_dispatch());
    }

    #[test]
    fn test_display_is_transparent() {
        let err: RestError = DispatchError::MissingQueryValue {
            operation: "search".to_string(),
            placeholder: "limit".to_string(),
        }
        .into();
        assert!(err.to_string().contains("'limit'"));
    }
}
