//! Handler and observer trait seams
//!
//! [`ErrorHandler`] is the sole extension point: the embedding application
//! supplies one implementation that turns each failure category into a
//! user-facing message. [`ResponseObserver`] is the parallel non-transforming
//! policy, notified of every outcome for logging and analytics.

use crate::error::DecodeError;
use crate::snapshot::{RequestSnapshot, ResponseSnapshot};
use crate::transport::NetworkError;

/// Caller-supplied policy producing a user-facing message per failure
/// category
///
/// The dispatcher passes messages through verbatim; validation, truncation,
/// and localization are the implementation's responsibility.
pub trait ErrorHandler: Send + Sync {
    /// Called for accepted responses, for observation only
    fn on_success(&self, response: &ResponseSnapshot) {
        let _ = response;
    }

    /// Response completed but its status code was rejected by policy
    fn status_error(
        &self,
        status: u16,
        request: Option<&RequestSnapshot>,
        response: Option<&ResponseSnapshot>,
    ) -> String;

    /// Transport-layer connectivity failure
    fn network_error(&self, error: &NetworkError) -> String;

    /// Body-decode or request-construction failure
    fn decode_error(&self, error: &DecodeError) -> String;

    /// Failure outside the transport and decode families
    fn unknown_error(&self, error: &anyhow::Error) -> String;
}

/// Non-transforming policy notified of every outcome
///
/// Useful for analytics and global logging; it never alters the outcome it
/// observes.
pub trait ResponseObserver: Send + Sync {
    /// An accepted response passed through
    fn on_success(&self, response: &ResponseSnapshot);

    /// A response was rejected for its status code
    fn on_status_error(
        &self,
        status: u16,
        request: Option<&RequestSnapshot>,
        response: Option<&ResponseSnapshot>,
    );

    /// A transport-layer failure was classified
    fn on_network_error(&self, error: &NetworkError);

    /// A decode failure was classified
    fn on_decode_error(&self, error: &DecodeError);

    /// An unknown failure was classified
    fn on_unknown_error(&self, error: &anyhow::Error);
}
