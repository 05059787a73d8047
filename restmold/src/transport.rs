//! HTTP transports.
//!
//! A [`Transport`] performs exactly one network exchange per call. The
//! default [`ReqwestTransport`] is backed by `reqwest`; tests substitute a
//! double to exercise the dispatch pipeline without a network.

use std::future::Future;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use restmold_define::{HeaderSet, RestMethod};
use tracing::debug;
use url::Url;

use crate::error::ClientError;
use crate::request::ResolvedRequest;
use crate::response::RawResponse;

/// Sends a resolved request and returns the raw response.
///
/// Implementations must not treat non-2xx statuses as errors.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        request: ResolvedRequest,
    ) -> impl Future<Output = Result<RawResponse, ClientError>> + Send;
}

/// Converts to the equivalent `reqwest::Method`.
pub fn to_reqwest_method(method: RestMethod) -> reqwest::Method {
    match method {
        RestMethod::Get => reqwest::Method::GET,
        RestMethod::Post => reqwest::Method::POST,
        RestMethod::Put => reqwest::Method::PUT,
        RestMethod::Patch => reqwest::Method::PATCH,
        RestMethod::Delete => reqwest::Method::DELETE,
        RestMethod::Head => reqwest::Method::HEAD,
        RestMethod::Options => reqwest::Method::OPTIONS,
    }
}

/// Transport backed by a `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default `reqwest::Client`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, ClientError> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self { client })
    }

    /// Wraps an already configured `reqwest::Client`.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    async fn send(&self, request: ResolvedRequest) -> Result<RawResponse, ClientError> {
        let url = Url::parse(&request.url).map_err(|source| ClientError::InvalidUrl {
            url: request.url.clone(),
            source,
        })?;
        let headers = to_header_map(&request.headers)?;

        debug!(method = %request.method, url = %url, "sending request");

        let response = self
            .client
            .request(to_reqwest_method(request.method), url)
            .headers(headers)
            .body(request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let headers = from_header_map(response.headers());
        let body = response.bytes().await?;

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

/// Non-UTF-8 values are decoded lossily rather than dropped.
fn from_header_map(map: &HeaderMap) -> HeaderSet {
    map.iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

fn to_header_map(headers: &HeaderSet) -> Result<HeaderMap, ClientError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers.iter() {
        let header_name =
            HeaderName::try_from(name).map_err(|e| ClientError::InvalidHeader {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        let header_value =
            HeaderValue::try_from(value).map_err(|e| ClientError::InvalidHeader {
                name: name.to_string(),
                message: e.to_string(),
            })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}
