//! Read-only snapshots of requests and responses
//!
//! Snapshots are owned by the transport layer and only borrowed (or cheaply
//! cloned) by the classification engine; nothing here mutates them.

use bytes::Bytes;
use http::{HeaderMap, Method};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{DecodeError, RequestError};
use crate::status::AcceptancePolicy;

/// Immutable view of an issued request
#[derive(Debug, Clone)]
pub struct RequestSnapshot {
    method: Method,
    url: Url,
    headers: HeaderMap,
}

impl RequestSnapshot {
    /// Create a snapshot with empty headers
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
        }
    }

    /// Attach the request headers
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// HTTP method of the request
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// URL the request was issued against
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Request headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
}

/// Immutable view of a completed response
#[derive(Debug, Clone)]
pub struct ResponseSnapshot {
    status: u16,
    url: Url,
    headers: HeaderMap,
    body: Bytes,
    request: Option<RequestSnapshot>,
}

impl ResponseSnapshot {
    /// Create a snapshot with empty headers and body
    pub fn new(status: u16, url: Url) -> Self {
        Self {
            status,
            url,
            headers: HeaderMap::new(),
            body: Bytes::new(),
            request: None,
        }
    }

    /// Attach the response body
    #[must_use]
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Attach the response headers
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Attach the snapshot of the request that produced this response
    #[must_use]
    pub fn with_request(mut self, request: RequestSnapshot) -> Self {
        self.request = Some(request);
        self
    }

    /// HTTP status code
    pub fn status(&self) -> u16 {
        self.status
    }

    /// URL the response came from
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw response body
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Snapshot of the originating request, when the transport captured one
    pub fn request(&self) -> Option<&RequestSnapshot> {
        self.request.as_ref()
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        serde_json::from_slice(&self.body).map_err(DecodeError::Json)
    }

    /// Decode the body as UTF-8 text
    pub fn text(&self) -> Result<String, DecodeError> {
        String::from_utf8(self.body.to_vec()).map_err(DecodeError::Text)
    }

    /// Reject this response unless its status code is accepted by `policy`
    ///
    /// Rejection produces the status failure that the classifier turns into
    /// a status-code error, so status-based rejection happens upstream of
    /// generic classification.
    pub fn require_status(self, policy: &AcceptancePolicy) -> Result<Self, RequestError> {
        if policy.accepts(self.status) {
            Ok(self)
        } else {
            Err(RequestError::Status(self))
        }
    }
}
