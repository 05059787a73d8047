//! Raw transport responses.

use bytes::Bytes;
use restmold_define::HeaderSet;

/// The response as received from the transport.
///
/// Any status code is a valid response; interpreting it is left to the
/// caller or the model's response hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// Response headers. Repeated header names keep only the last value, and
    /// values that are not valid UTF-8 are decoded lossily.
    pub headers: HeaderSet,
    pub body: Bytes,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            headers: HeaderSet::new(),
            body: body.into(),
        }
    }

    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
