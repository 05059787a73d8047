//! HTTP transport and network errors.

use thiserror::Error;

/// Errors from the transport layer.
///
/// Status codes are never turned into errors here: a 404 or 500 reaches the
/// caller as a regular response.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// The resolved URL could not be parsed.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A header name or value is not valid on the wire.
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },
}

impl ClientError {
    /// Returns `true` if the request timed out, either at the client or
    /// inside the HTTP stack.
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Request(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// Returns `true` if the connection could not be established.
    pub fn is_connect(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_connect())
    }

    /// Returns the HTTP status code attached to the underlying error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_display() {
        let err = ClientError::Timeout { duration_ms: 5000 };
        assert_eq!(err.to_string(), "Request timeout after 5000ms");
        assert!(err.is_timeout());
        assert!(!err.is_connect());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_invalid_url() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = ClientError::InvalidUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid URL 'not a url'"));
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_invalid_header() {
        let err = ClientError::InvalidHeader {
            name: "Bad Header".to_string(),
            message: "invalid HTTP header name".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid header 'Bad Header': invalid HTTP header name"
        );
    }
}
