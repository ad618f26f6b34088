//! Tracing-backed observer

use triage_core::{
    DecodeError, NetworkError, RequestSnapshot, ResponseObserver, ResponseSnapshot,
};

/// Observer emitting one structured tracing event per outcome
///
/// Register it process-wide with [`crate::set_default_observer`] or attach it
/// to a single [`crate::Triage`] instance.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ResponseObserver for TracingObserver {
    fn on_success(&self, response: &ResponseSnapshot) {
        tracing::debug!(status = response.status(), url = %response.url(), "request succeeded");
    }

    fn on_status_error(
        &self,
        status: u16,
        request: Option<&RequestSnapshot>,
        _response: Option<&ResponseSnapshot>,
    ) {
        let url = request.map(|r| r.url().as_str().to_owned());
        tracing::warn!(status, url, "response rejected for status code");
    }

    fn on_network_error(&self, error: &NetworkError) {
        tracing::warn!(error = %error, "network failure");
    }

    fn on_decode_error(&self, error: &DecodeError) {
        tracing::warn!(error = %error, "decode failure");
    }

    fn on_unknown_error(&self, error: &anyhow::Error) {
        tracing::warn!(error = %error, "unclassified failure");
    }
}
