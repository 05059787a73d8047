//! Restmold Definition Library
//!
//! This crate provides the types (primitives) a REST model uses to declare
//! its routes. The declarations are consumed by the `restmold` crate, which
//! resolves them into HTTP requests at call time.
//!
//! ## Core Types
//!
//! - [`RouteDeclaration`] - HTTP method, path template and optional static body
//! - [`RouteMap`] - Operation name to [`RouteDeclaration`] mapping
//! - [`RestMethod`] - HTTP methods (GET, POST, PUT, etc.)
//! - [`HeaderSet`] - Ordered, case-insensitive header collection
//! - [`CallOptions`] - Per-call path and query parameters
//!
//! ## Path Templates
//!
//! A path template may contain path placeholders delimited by `:` and at most
//! one query section introduced by `?` whose placeholder names are joined with
//! `&`:
//!
//! ```text
//! /users/:id
//! /users/:id:/posts
//! /search?q&limit
//! ```
//!
//! ## Examples
//!
//! ```
//! use restmold_define::{CallOptions, RestMethod, RouteDeclaration, RouteMap};
//!
//! let routes = RouteMap::from([
//!     ("index".to_string(), RouteDeclaration::new(RestMethod::Get, "/users/:id")),
//!     ("search".to_string(), RouteDeclaration::new(RestMethod::Get, "/search?q&limit")),
//! ]);
//!
//! let options = CallOptions::new().param("id", 42);
//!
//! assert_eq!(routes.len(), 2);
//! assert_eq!(options.params.unwrap()["id"], "42");
//! ```

pub mod headers;
pub mod options;
pub mod prelude;
pub mod types;

// Re-export main types at crate root
pub use headers::HeaderSet;
pub use options::CallOptions;
pub use types::{RestMethod, RouteDeclaration, RouteMap};
