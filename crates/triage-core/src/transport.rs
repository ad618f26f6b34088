//! Transport-layer failures and their four-way classification
//!
//! [`TransportError`] is the closed union of failure codes the transport
//! layer produces; [`NetworkError`] buckets them into the four kinds the
//! handler policy is asked to message. Each transport code maps to exactly
//! one bucket.

use thiserror::Error;

/// Raw connectivity failure reported by the transport layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Device has no network connection
    #[error("not connected to the network")]
    NotConnected,

    /// Request exceeded its deadline
    #[error("request timed out")]
    TimedOut,

    /// Connection dropped mid-request
    #[error("connection lost: {0}")]
    ConnectionLost(String),

    /// Hostname could not be resolved
    #[error("DNS lookup failed for {host}")]
    DnsLookupFailed {
        /// Host that failed to resolve
        host: String,
    },

    /// Request was cancelled by the caller
    #[error("request cancelled")]
    Cancelled,

    /// TLS negotiation or certificate failure
    #[error("TLS failure: {0}")]
    Tls(String),

    /// Redirect limit exceeded
    #[error("too many redirects")]
    TooManyRedirects,

    /// Any other transport failure
    #[error("transport failure: {0}")]
    Other(String),
}

/// Transport failure bucketed into the four kinds surfaced to handlers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// No network connection at all
    #[error("no network connection: {0}")]
    NotConnected(#[source] TransportError),

    /// Transient connection trouble (timeout, drop, DNS); usually retryable
    #[error("bad connection: {0}")]
    BadConnection(#[source] TransportError),

    /// Request was cancelled upstream; this layer only labels it
    #[error("cancelled: {0}")]
    Cancelled(#[source] TransportError),

    /// Everything else (TLS, redirect limits, unknown transport trouble)
    #[error("network request failed: {0}")]
    Failed(#[source] TransportError),
}

impl NetworkError {
    /// Bucket a transport failure, first match wins
    pub fn classify(error: TransportError) -> Self {
        match error {
            e @ TransportError::NotConnected => Self::NotConnected(e),
            e @ (TransportError::TimedOut
            | TransportError::ConnectionLost(_)
            | TransportError::DnsLookupFailed { .. }) => Self::BadConnection(e),
            e @ TransportError::Cancelled => Self::Cancelled(e),
            e => Self::Failed(e),
        }
    }

    /// The original transport failure
    pub fn transport(&self) -> &TransportError {
        match self {
            Self::NotConnected(e) | Self::BadConnection(e) | Self::Cancelled(e) | Self::Failed(e) => e,
        }
    }
}
