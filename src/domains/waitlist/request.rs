//! Outgoing request description.
//!
//! An [`ApiRequest`] is a transport-agnostic value built by the tools and
//! turned into an HTTP call by [`super::WaitlistClient`].

use reqwest::Method;
use serde_json::Value;

/// A single call against `/api/v1/waitlist/{waitlist_key}`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    method: Method,
    segments: Vec<String>,
    query: Option<String>,
    body: Option<Value>,
    headers: Vec<(String, String)>,
}

impl ApiRequest {
    /// Create a request for a path relative to the waitlist root.
    ///
    /// `path` is split on `/`; each piece becomes one URL path segment.
    pub fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            segments: path
                .split('/')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            query: None,
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: &str) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Append one path segment. The value is percent-encoded as a whole,
    /// so `/` or `?` inside it never change the route.
    pub fn segment(mut self, value: impl Into<String>) -> Self {
        self.segments.push(value.into());
        self
    }

    /// Set an already URL-encoded query string (without the leading `?`).
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    /// Set the JSON body.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add an extra header. Reserved headers are dropped when sending.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Relative path, for logging. Segments are shown unencoded.
    pub fn path(&self) -> String {
        format!("/{}", self.segments.join("/"))
    }

    pub fn query_string(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}
