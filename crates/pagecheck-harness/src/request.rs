//! Mock session/request pair for driving arbitrary resource requests

use crate::error::{HarnessError, HarnessResult};
use axum::body::Body;
use axum::http::{Method, Request};
use ulid::Ulid;

/// A mock HTTP session, identified by a generated id.
///
/// The id travels with every request built from the session so handlers
/// that care about session affinity can observe it.
pub struct MockSession {
    id: String,
}

impl MockSession {
    pub fn new() -> Self {
        Self {
            id: Ulid::new().to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Default for MockSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Header carrying the mock session id
pub(crate) const SESSION_HEADER: &str = "x-mock-session";

/// A mock HTTP request with a settable target URL
pub struct MockRequest {
    method: Method,
    url: String,
    headers: Vec<(String, String)>,
    session_id: String,
}

impl MockRequest {
    /// Create a GET request for "/" within the given session
    pub fn new(session: &MockSession) -> Self {
        Self {
            method: Method::GET,
            url: "/".to_string(),
            headers: Vec::new(),
            session_id: session.id.clone(),
        }
    }

    /// Point the request at a resource path.
    ///
    /// A missing leading slash is tolerated (resource URIs are commonly
    /// written without one) and normalized on.
    pub fn set_url(&mut self, url: &str) {
        self.url = if url.starts_with('/') {
            url.to_string()
        } else {
            format!("/{}", url)
        };
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    /// Add a request header
    pub fn set_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.push((name.into(), value.into()));
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Build the HTTP request handed to the router
    pub(crate) fn into_http(self) -> HarnessResult<Request<Body>> {
        let mut builder = Request::builder()
            .method(self.method)
            .uri(&self.url)
            .header(SESSION_HEADER, &self.session_id);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
            .body(Body::empty())
            .map_err(|e| HarnessError::InvalidRequest {
                url: self.url,
                message: e.to_string(),
            })
    }
}
