//! Per-call options for invoking a declared route.

use std::collections::BTreeMap;
use std::time::Duration;

/// Arguments supplied when invoking an operation.
///
/// `params` and `query` are optional as a whole: `None` skips that
/// substitution phase entirely, while `Some` of an empty map still runs it.
/// The distinction matters for query substitution, which fails on a template
/// without a query section even when no values are given.
///
/// ## Examples
///
/// ```
/// use std::time::Duration;
/// use restmold_define::CallOptions;
///
/// let options = CallOptions::new()
///     .query_param("q", "cats")
///     .query_param("limit", 10)
///     .with_timeout(Duration::from_secs(5));
///
/// assert!(options.params.is_none());
/// assert_eq!(options.query.as_ref().unwrap()["limit"], "10");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallOptions {
    /// Path placeholder values, keyed by placeholder name.
    pub params: Option<BTreeMap<String, String>>,
    /// Query placeholder values, keyed by placeholder name.
    pub query: Option<BTreeMap<String, String>>,
    /// Overrides the client's transport timeout for this call.
    pub timeout: Option<Duration>,
}

impl CallOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a path placeholder value.
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.to_string());
        self
    }

    /// Adds a query placeholder value.
    pub fn query_param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.to_string());
        self
    }

    /// Replaces the path parameters with `params`, even if it is empty.
    pub fn with_params(mut self, params: BTreeMap<String, String>) -> Self {
        self.params = Some(params);
        self
    }

    /// Replaces the query parameters with `query`, even if it is empty.
    pub fn with_query(mut self, query: BTreeMap<String, String>) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}
