//! Shared fixtures for restmold integration tests.

#![allow(dead_code)]

use std::sync::Mutex;

use restmold::{
    ClientError, HeaderSet, RawResponse, ResolvedRequest, RestMethod, RestModel, RouteDeclaration,
    RouteMap, Transport,
};

/// Transport double that records requests and answers with a canned response.
pub struct RecordingTransport {
    pub sent: Mutex<Vec<ResolvedRequest>>,
    pub events: Option<&'static Mutex<Vec<&'static str>>>,
    status: u16,
}

impl RecordingTransport {
    pub fn new(status: u16) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            events: None,
            status,
        }
    }

    /// Appends `"transport"` to `events` on every send.
    pub fn with_events(mut self, events: &'static Mutex<Vec<&'static str>>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn calls(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last(&self) -> ResolvedRequest {
        self.sent
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: ResolvedRequest) -> Result<RawResponse, ClientError> {
        if let Some(events) = self.events {
            events.lock().unwrap().push("transport");
        }
        self.sent.lock().unwrap().push(request);
        Ok(RawResponse::new(self.status, "{}"))
    }
}

/// A model built from plain values.
#[derive(Default)]
pub struct TestModel {
    pub base_uri: String,
    pub headers: HeaderSet,
    pub routes: RouteMap,
}

impl TestModel {
    pub fn new(base_uri: &str) -> Self {
        Self {
            base_uri: base_uri.to_string(),
            ..Self::default()
        }
    }

    pub fn route(mut self, name: &str, method: RestMethod, path: &str) -> Self {
        self.routes
            .insert(name.to_string(), RouteDeclaration::new(method, path));
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }
}

impl RestModel for TestModel {
    fn headers(&self) -> HeaderSet {
        self.headers.clone()
    }

    fn routes(&self) -> RouteMap {
        self.routes.clone()
    }

    fn base_uri(&self) -> String {
        self.base_uri.clone()
    }

    fn name(&self) -> &str {
        "TestModel"
    }
}
