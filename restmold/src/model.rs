//! The consumer-facing model trait.

use restmold_define::{HeaderSet, RouteMap};

use crate::request::ResolvedRequest;
use crate::response::RawResponse;

/// A declarative description of a REST API.
///
/// Implementors declare routes, a base URI and header overrides; a
/// [`RestClient`](crate::RestClient) reads them once at construction and
/// exposes every route name through
/// [`invoke`](crate::RestClient::invoke). Every method has a default, so a
/// model only overrides what it needs.
///
/// | Method | Default |
/// |--------|---------|
/// | [`headers`](Self::headers) | no overrides (the JSON defaults apply) |
/// | [`routes`](Self::routes) | empty |
/// | [`base_uri`](Self::base_uri) | `""` |
/// | [`request_hook`](Self::request_hook) | identity |
/// | [`response_hook`](Self::response_hook) | identity |
///
/// ## Examples
///
/// ```
/// use restmold::{HeaderSet, ResolvedRequest, RestMethod, RestModel, RouteDeclaration, RouteMap};
///
/// struct Users;
///
/// impl RestModel for Users {
///     fn headers(&self) -> HeaderSet {
///         HeaderSet::from_iter([("Authorization", "Bearer token")])
///     }
///
///     fn routes(&self) -> RouteMap {
///         RouteMap::from([
///             ("index".to_string(), RouteDeclaration::new(RestMethod::Get, "/users")),
///             ("show".to_string(), RouteDeclaration::new(RestMethod::Get, "/users/:id")),
///         ])
///     }
///
///     fn base_uri(&self) -> String {
///         "https://api.example.com/v1".to_string()
///     }
///
///     fn request_hook(&self, request: ResolvedRequest) -> ResolvedRequest {
///         request.with_header("X-Client", "users")
///     }
/// }
/// ```
pub trait RestModel: Send + Sync {
    /// Header overrides merged over `Content-Type` and `Accept` JSON defaults.
    ///
    /// Can carry authentication headers.
    fn headers(&self) -> HeaderSet {
        HeaderSet::new()
    }

    /// Routes keyed by operation name.
    fn routes(&self) -> RouteMap {
        RouteMap::new()
    }

    /// Prefix for every resolved path (e.g. `"https://localhost:9091/api"`).
    fn base_uri(&self) -> String {
        String::new()
    }

    /// Rewrites the assembled request immediately before it is sent.
    fn request_hook(&self, request: ResolvedRequest) -> ResolvedRequest {
        request
    }

    /// Rewrites the transport response before it is returned to the caller.
    fn response_hook(&self, response: RawResponse) -> RawResponse {
        response
    }

    /// Name used to identify the model in error messages.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
