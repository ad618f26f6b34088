//! Map `reqwest` failures into the closed pipeline union
//!
//! Check order matters: status and connectivity flags are inspected before
//! the broader builder/decode buckets, since a single `reqwest::Error` can
//! carry several of them.

use triage_core::{DecodeError, RequestError, ResponseSnapshot, TransportError};
use url::Url;

/// Convert a `reqwest` error into the pipeline failure union
pub fn from_reqwest(error: reqwest::Error) -> RequestError {
    if let Some(status) = error.status() {
        let url = error
            .url()
            .cloned()
            .unwrap_or_else(|| Url::parse("http://localhost/").expect("valid fallback URL"));
        return RequestError::Status(ResponseSnapshot::new(status.as_u16(), url));
    }
    if error.is_timeout() {
        return TransportError::TimedOut.into();
    }
    if error.is_connect() {
        return TransportError::NotConnected.into();
    }
    if error.is_redirect() {
        return TransportError::TooManyRedirects.into();
    }
    if error.is_decode() {
        return DecodeError::Body {
            detail: error.to_string(),
        }
        .into();
    }
    if error.is_builder() {
        return DecodeError::RequestBuild(error.to_string()).into();
    }

    TransportError::Other(error.to_string()).into()
}
