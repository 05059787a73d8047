//! Request resolution and execution with tracing instrumentation.

use std::time::Duration;

use restmold_define::{CallOptions, HeaderSet, RouteMap};
use tracing::{Span, debug, instrument, warn};

use crate::error::{ClientError, DispatchError, RestError};
use crate::model::RestModel;
use crate::request::ResolvedRequest;
use crate::response::RawResponse;
use crate::template::{self, Separators, TemplateError};
use crate::transport::{ReqwestTransport, Transport};

/// Default transport timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Builder for configuring a [`RestClient`].
pub struct RestClientBuilder<M, T> {
    model: M,
    transport: T,
    timeout: Duration,
    separators: Separators,
}

impl<M: RestModel, T: Transport> RestClientBuilder<M, T> {
    fn new(model: M, transport: T) -> Self {
        Self {
            model,
            transport,
            timeout: DEFAULT_TIMEOUT,
            separators: Separators::default(),
        }
    }

    /// Sets the timeout applied to every transport call.
    ///
    /// Individual calls can override it with [`CallOptions::with_timeout`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the character delimiting path placeholders (default `:`).
    pub fn path_separator(mut self, separator: char) -> Self {
        self.separators.path = separator;
        self
    }

    /// Sets the character introducing the query section (default `?`).
    pub fn query_separator(mut self, separator: char) -> Self {
        self.separators.query = separator;
        self
    }

    /// Replaces the transport.
    pub fn transport<U: Transport>(self, transport: U) -> RestClientBuilder<M, U> {
        RestClientBuilder {
            model: self.model,
            transport,
            timeout: self.timeout,
            separators: self.separators,
        }
    }

    /// Builds the client, reading the model's declarations once.
    pub fn build(self) -> RestClient<M, T> {
        let routes = self.model.routes();
        let headers = HeaderSet::json_defaults().merged(&self.model.headers());
        let base_uri = self.model.base_uri();

        debug!(
            model = self.model.name(),
            routes = routes.len(),
            base_uri = %base_uri,
            "built rest client"
        );

        RestClient {
            model: self.model,
            transport: self.transport,
            routes,
            headers,
            base_uri,
            separators: self.separators,
            timeout: self.timeout,
        }
    }
}

/// Dispatches declared operations over a [`Transport`].
///
/// The route map, merged headers and base URI are captured when the client
/// is built and never change afterwards, so a client can be shared across
/// tasks (e.g. behind an `Arc`) and invoked concurrently.
///
/// ## Examples
///
/// ```rust,ignore
/// use restmold::{CallOptions, RestClient};
///
/// let client = RestClient::builder(ApiExample, ReqwestTransport::new()?)
///     .timeout(Duration::from_secs(5))
///     .build();
///
/// let response = client
///     .invoke("search", CallOptions::new().query_param("q", "cats").query_param("limit", 10))
///     .await?;
/// ```
pub struct RestClient<M, T = ReqwestTransport> {
    model: M,
    transport: T,
    routes: RouteMap,
    headers: HeaderSet,
    base_uri: String,
    separators: Separators,
    timeout: Duration,
}

impl<M: RestModel> RestClient<M, ReqwestTransport> {
    /// Creates a client over the default `reqwest` transport.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(model: M) -> Result<Self, RestError> {
        Ok(Self::builder(model, ReqwestTransport::new()?).build())
    }
}

impl<M: RestModel, T: Transport> RestClient<M, T> {
    /// Creates a builder for a client over `transport`.
    pub fn builder(model: M, transport: T) -> RestClientBuilder<M, T> {
        RestClientBuilder::new(model, transport)
    }

    /// Creates a client over `transport` with default settings.
    pub fn with_transport(model: M, transport: T) -> Self {
        Self::builder(model, transport).build()
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the declared routes.
    pub fn routes(&self) -> &RouteMap {
        &self.routes
    }

    /// Returns the merged header set sent with every request.
    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Invokes `operation` without any call options.
    ///
    /// ## Errors
    ///
    /// See [`invoke`](Self::invoke).
    pub async fn call(&self, operation: &str) -> Result<RawResponse, RestError> {
        self.invoke(operation, CallOptions::default()).await
    }

    /// Resolves `operation`, sends it and returns the response.
    ///
    /// The request passes through the model's request hook before the
    /// transport and the response through its response hook afterwards. A
    /// non-2xx status is returned as a normal response.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The operation is not declared ([`DispatchError::UnknownOperation`])
    /// - A query placeholder has no value ([`DispatchError::MissingQueryValue`])
    /// - Query values were given for a path without a query section
    /// - The transport fails or exceeds the timeout ([`ClientError`])
    #[instrument(
        name = "rest_request",
        skip(self, options),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn invoke(
        &self,
        operation: &str,
        options: CallOptions,
    ) -> Result<RawResponse, RestError> {
        let request = self.resolve(operation, &options)?;

        Span::current().record("http.method", request.method.to_string().as_str());
        Span::current().record("http.url", request.url.as_str());

        let request = self.model.request_hook(request);
        let timeout = options.timeout.unwrap_or(self.timeout);

        let response = match tokio::time::timeout(timeout, self.transport.send(request)).await {
            Ok(result) => result.inspect_err(|_| {
                Span::current().record("otel.status_code", "ERROR");
            })?,
            Err(_) => {
                let duration_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                Span::current().record("otel.status_code", "ERROR");
                warn!(duration_ms, "transport timed out");
                return Err(ClientError::Timeout { duration_ms }.into());
            }
        };

        Span::current().record("http.status_code", response.status);
        let otel_status = if response.status >= 500 { "ERROR" } else { "OK" };
        Span::current().record("otel.status_code", otel_status);

        Ok(self.model.response_hook(response))
    }

    /// Resolves `operation` into the request that [`invoke`](Self::invoke)
    /// would send, without touching the transport or the hooks.
    ///
    /// ## Errors
    ///
    /// Returns a [`DispatchError`] for unknown operations and failed query
    /// substitution.
    pub fn resolve(
        &self,
        operation: &str,
        options: &CallOptions,
    ) -> Result<ResolvedRequest, RestError> {
        let Some(route) = self.routes.get(operation) else {
            warn!(operation, model = self.model.name(), "operation is not declared");
            return Err(DispatchError::UnknownOperation {
                model: self.model.name().to_string(),
                operation: operation.to_string(),
            }
            .into());
        };

        let mut path = route.path.clone();

        if let Some(params) = &options.params {
            path = template::substitute_path_params(&path, params, self.separators.path);
        }

        if let Some(query) = &options.query {
            path = template::substitute_query_params(&path, query, self.separators.query)
                .map_err(|e| {
                    warn!(operation, path = %path, error = %e, "query substitution failed");
                    dispatch_error(operation, &path, e)
                })?;
        }

        let body = match &route.body {
            Some(body) => serde_json::to_string(body).map_err(DispatchError::from)?,
            None => "{}".to_string(),
        };
        let url = format!("{}{}", self.base_uri, path);

        debug!(operation, method = %route.method, url = %url, "resolved route");

        Ok(ResolvedRequest {
            method: route.method,
            url,
            headers: self.headers.clone(),
            body,
        })
    }
}

fn dispatch_error(operation: &str, path: &str, error: TemplateError) -> DispatchError {
    match error {
        TemplateError::MissingQueryValue(placeholder) => DispatchError::MissingQueryValue {
            operation: operation.to_string(),
            placeholder,
        },
        e @ TemplateError::MissingQuerySection { .. } => DispatchError::MalformedTemplate {
            operation: operation.to_string(),
            path: path.to_string(),
            reason: e.to_string(),
        },
    }
}
