//! Declarative REST API clients.
//!
//! The `restmold` crate turns a set of named route declarations into a
//! callable client. A model declares its routes, base URI and header
//! overrides by implementing [`RestModel`]; a [`RestClient`] then resolves
//! operation names into HTTP requests at call time.
//!
//! ## Features
//!
//! - **Declarative models**: Routes map operation names to a method and a path template
//! - **Path templating**: `:`-delimited path placeholders and `?`-introduced query placeholders
//! - **Request/response hooks**: Rewrite the outgoing request or incoming response per model
//! - **Raw responses**: Every status is returned as-is; interpretation is left to the caller
//! - **Manifests**: Load a model from a JSON or YAML document with [`ManifestModel`]
//! - **Async transport**: Built on `reqwest` with a per-call `tokio` timeout
//!
//! ## Example
//!
//! ```rust,no_run
//! use restmold::{CallOptions, RestClient, RestMethod, RestModel, RouteDeclaration, RouteMap};
//!
//! struct Users;
//!
//! impl RestModel for Users {
//!     fn routes(&self) -> RouteMap {
//!         RouteMap::from([
//!             ("show".to_string(), RouteDeclaration::new(RestMethod::Get, "/users/:id")),
//!             ("search".to_string(), RouteDeclaration::new(RestMethod::Get, "/search?q&limit")),
//!         ])
//!     }
//!
//!     fn base_uri(&self) -> String {
//!         "http://api.test".to_string()
//!     }
//! }
//!
//! # async fn run() -> Result<(), restmold::RestError> {
//! let client = RestClient::new(Users)?;
//!
//! // GET http://api.test/users/42
//! let user = client.invoke("show", CallOptions::new().param("id", 42)).await?;
//!
//! // GET http://api.test/search?q=cats&limit=10
//! let found = client
//!     .invoke("search", CallOptions::new().query_param("q", "cats").query_param("limit", 10))
//!     .await?;
//! # let _ = (user, found);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod manifest;
pub mod model;
pub mod request;
pub mod response;
pub mod template;
pub mod transport;

// Re-exports for convenience
pub use client::{RestClient, RestClientBuilder};
pub use error::{ClientError, ConfigError, DispatchError, RestError};
pub use manifest::ManifestModel;
pub use model::RestModel;
pub use request::ResolvedRequest;
pub use response::RawResponse;
pub use restmold_define::{CallOptions, HeaderSet, RestMethod, RouteDeclaration, RouteMap};
pub use template::Separators;
pub use transport::{ReqwestTransport, Transport};
