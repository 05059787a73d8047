//! Path template substitution.
//!
//! Templates carry two kinds of placeholders:
//!
//! - **Path placeholders** are the segments between path separators (`:` by
//!   default). Splitting `/users/:id` yields `["/users/", "id"]`; a segment
//!   that exactly equals a parameter name is replaced and all segments are
//!   joined back without the separator. A placeholder in the middle of a path
//!   therefore needs a closing separator: `/users/:id:/posts`.
//! - **Query placeholders** follow the query separator (`?` by default) as
//!   `&`-joined names: `/search?q&limit` becomes `/search?q=cats&limit=10`.
//!
//! Neither phase validates the template ahead of time and substituted values
//! are inserted as-is, without URL encoding.

use std::collections::BTreeMap;

use thiserror::Error;

/// Default path placeholder separator.
pub const DEFAULT_PATH_SEPARATOR: char = ':';

/// Default query section separator.
pub const DEFAULT_QUERY_SEPARATOR: char = '?';

/// Separator characters used when interpreting path templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub path: char,
    pub query: char,
}

impl Default for Separators {
    fn default() -> Self {
        Self {
            path: DEFAULT_PATH_SEPARATOR,
            query: DEFAULT_QUERY_SEPARATOR,
        }
    }
}

/// Failures produced by query substitution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("path has no query section after '{separator}'")]
    MissingQuerySection { separator: char },

    #[error("no value supplied for query placeholder '{0}'")]
    MissingQueryValue(String),
}

/// Replaces path placeholders with values from `params`.
///
/// Every separator is consumed, whether or not the segment it introduces
/// matched a parameter.
///
/// ## Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use restmold::template::substitute_path_params;
///
/// let params = BTreeMap::from([("id".to_string(), "42".to_string())]);
///
/// assert_eq!(substitute_path_params("/users/:id", &params, ':'), "/users/42");
/// assert_eq!(substitute_path_params("/users/:id:/posts", &params, ':'), "/users/42/posts");
/// // `id/posts` is not an exact match, so it passes through unchanged
/// assert_eq!(substitute_path_params("/users/:id/posts", &params, ':'), "/users/id/posts");
/// ```
pub fn substitute_path_params(
    template: &str,
    params: &BTreeMap<String, String>,
    separator: char,
) -> String {
    template
        .split(separator)
        .map(|segment| params.get(segment).map_or(segment, String::as_str))
        .collect()
}

/// Replaces the query placeholder section with `name=value` pairs.
///
/// The names are taken from the template in order; every one of them must
/// have an entry in `query`. Only the first section after the separator is
/// used and anything past a second separator is dropped.
///
/// ## Errors
///
/// - [`TemplateError::MissingQuerySection`] when `path` contains no query separator
/// - [`TemplateError::MissingQueryValue`] when a named placeholder has no value
///
/// ## Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use restmold::template::substitute_query_params;
///
/// let query = BTreeMap::from([
///     ("x".to_string(), "1".to_string()),
///     ("y".to_string(), "2".to_string()),
/// ]);
///
/// assert_eq!(substitute_query_params("/a?x&y", &query, '?').unwrap(), "/a?x=1&y=2");
/// ```
pub fn substitute_query_params(
    path: &str,
    query: &BTreeMap<String, String>,
    separator: char,
) -> Result<String, TemplateError> {
    let mut sections = path.split(separator);
    let prefix = sections.next().unwrap_or_default();
    let placeholders = sections
        .next()
        .ok_or(TemplateError::MissingQuerySection { separator })?;

    let pairs = placeholders
        .split('&')
        .map(|name| {
            query
                .get(name)
                .map(|value| format!("{name}={value}"))
                .ok_or_else(|| TemplateError::MissingQueryValue(name.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(format!("{prefix}{separator}{}", pairs.join("&")))
}
