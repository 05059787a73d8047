//! The fully resolved request handed to hooks and transports.

use restmold_define::{HeaderSet, RestMethod};

/// A request built from a route declaration and call options.
///
/// Created once per call and passed by value through the request hook to
/// the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    pub method: RestMethod,
    /// Base URI concatenated with the substituted path.
    pub url: String,
    /// The client's merged header set.
    pub headers: HeaderSet,
    /// JSON-encoded body; `"{}"` when the route declares none.
    pub body: String,
}

impl ResolvedRequest {
    /// Returns the request with one header added or replaced.
    ///
    /// ## Examples
    ///
    /// ```
    /// use restmold::{HeaderSet, ResolvedRequest, RestMethod};
    ///
    /// let request = ResolvedRequest {
    ///     method: RestMethod::Get,
    ///     url: "http://api.test/users".to_string(),
    ///     headers: HeaderSet::json_defaults(),
    ///     body: "{}".to_string(),
    /// }
    /// .with_header("X-Signature", "abc");
    ///
    /// assert_eq!(request.headers.get("x-signature"), Some("abc"));
    /// ```
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }
}
