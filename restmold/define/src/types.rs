//! Core types for route declarations.
//!
//! - [`RestMethod`] - HTTP method enumeration
//! - [`RouteDeclaration`] - A single declared route
//! - [`RouteMap`] - The registry of declared routes keyed by operation name

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// HTTP methods supported by declared routes.
///
/// ## Examples
///
/// Parse from string:
///
/// ```
/// use std::str::FromStr;
/// use restmold_define::RestMethod;
///
/// let method = RestMethod::from_str("GET").unwrap();
/// assert_eq!(method, RestMethod::Get);
/// ```
///
/// Display as uppercase:
///
/// ```
/// use restmold_define::RestMethod;
///
/// assert_eq!(RestMethod::Post.to_string(), "POST");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a new resource
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
    /// HTTP HEAD - Get headers only (no body)
    Head,
    /// HTTP OPTIONS - Get allowed methods for a resource
    Options,
}

/// A single declared route.
///
/// The path is stored verbatim; placeholders are only interpreted when the
/// route is invoked, so a malformed template is accepted here and fails at
/// call time.
///
/// ## Examples
///
/// A GET route with a path placeholder:
///
/// ```
/// use restmold_define::{RestMethod, RouteDeclaration};
///
/// let route = RouteDeclaration::new(RestMethod::Get, "/users/:id");
/// assert!(route.body.is_none());
/// ```
///
/// A POST route with a static JSON body:
///
/// ```
/// use restmold_define::{RestMethod, RouteDeclaration};
///
/// let route = RouteDeclaration::new(RestMethod::Post, "/users")
///     .with_body(serde_json::json!({ "role": "admin" }));
/// assert_eq!(route.body.unwrap()["role"], "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteDeclaration {
    /// HTTP method for this route.
    pub method: RestMethod,
    /// Path template (e.g., "/users/:id" or "/search?q&limit").
    pub path: String,
    /// Static request body, serialized as JSON on every call.
    ///
    /// When `None` the request carries an empty JSON object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl RouteDeclaration {
    /// Creates a route with no static body.
    pub fn new(method: RestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    /// Attaches a static JSON body to the route.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Declared routes keyed by operation name.
///
/// An empty map is legal; every invocation against it fails as an unknown
/// operation.
pub type RouteMap = BTreeMap<String, RouteDeclaration>;
