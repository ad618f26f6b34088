//! Failure unions: pipeline input, decode family, and the classified output
//!
//! [`RequestError`] is the closed union the request pipeline produces, so the
//! classifier pattern-matches exhaustively instead of downcasting.
//! [`ClassifiedError`] is the canonical four-way taxonomy surfaced to
//! application code; its `Display` is the user-facing message, its causes are
//! kept for programmatic inspection.

use thiserror::Error;

use crate::snapshot::{RequestSnapshot, ResponseSnapshot};
use crate::transport::{NetworkError, TransportError};

/// Body-decoding and request-construction library errors
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Response body failed to parse as JSON
    #[error("failed to decode response body as JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// Response body failed to decode as an image
    #[error("failed to decode response body as an image: {detail}")]
    Image {
        /// Decoder diagnostic
        detail: String,
    },

    /// Response body is not valid UTF-8 text
    #[error("response body is not valid UTF-8")]
    Text(#[source] std::string::FromUtf8Error),

    /// Opaque body-decode failure reported by the transport integration
    #[error("failed to decode response body: {detail}")]
    Body {
        /// Transport diagnostic
        detail: String,
    },

    /// Request could not be constructed
    #[error("failed to build request: {0}")]
    RequestBuild(String),

    /// Response carried a status code outside the HTTP protocol range
    #[error("response carried invalid status code {0}")]
    InvalidStatus(u16),
}

/// Failure produced by the request pipeline, closed for exhaustive
/// classification
#[derive(Debug, Error)]
pub enum RequestError {
    /// Response completed but its status code was rejected by policy
    #[error("unacceptable status code {}", .0.status())]
    Status(ResponseSnapshot),

    /// Body-decode or request-construction failure
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Transport-layer connectivity failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Arbitrary application error surfacing through the same channel
    #[error("unexpected error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Canonical classified failure: one category, a user-facing message, and the
/// preserved original cause
#[derive(Debug, Error)]
pub enum ClassifiedError {
    /// Connectivity failure, bucketed by [`NetworkError`]
    #[error("{message}")]
    Network {
        /// User-facing message produced by the handler policy
        message: String,
        /// Bucketed transport failure
        #[source]
        cause: NetworkError,
    },

    /// Completed response whose status code was rejected
    #[error("{message}")]
    Status {
        /// User-facing message produced by the handler policy
        message: String,
        /// Rejected status code
        status: u16,
        /// Originating request, when captured
        request: Option<RequestSnapshot>,
        /// The rejected response
        response: Option<ResponseSnapshot>,
    },

    /// Body-decode or request-construction failure
    #[error("{message}")]
    Decode {
        /// User-facing message produced by the handler policy
        message: String,
        /// Original decode failure
        #[source]
        cause: DecodeError,
    },

    /// Failure outside the transport and decode families
    #[error("{message}")]
    Unknown {
        /// User-facing message produced by the handler policy
        message: String,
        /// Opaque original cause
        cause: anyhow::Error,
    },
}

impl ClassifiedError {
    /// The user-facing message
    pub fn message(&self) -> &str {
        match self {
            Self::Network { message, .. }
            | Self::Status { message, .. }
            | Self::Decode { message, .. }
            | Self::Unknown { message, .. } => message,
        }
    }

    /// Short category label for diagnostics
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::Status { .. } => "status",
            Self::Decode { .. } => "decode",
            Self::Unknown { .. } => "unknown",
        }
    }

    /// Replace the user-facing message, keeping category and cause
    ///
    /// Pure construction: re-wrapping with an identical message yields an
    /// equal value.
    #[must_use]
    pub fn with_message(mut self, new_message: impl Into<String>) -> Self {
        match &mut self {
            Self::Network { message, .. }
            | Self::Status { message, .. }
            | Self::Decode { message, .. }
            | Self::Unknown { message, .. } => *message = new_message.into(),
        }
        self
    }
}
