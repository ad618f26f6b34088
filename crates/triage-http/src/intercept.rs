//! Pre-completion interceptor
//!
//! Runs the status check, classification, dispatch, and observer
//! notification on a completed outcome before the completion path sees it.

use std::sync::Arc;

use triage_core::{
    AcceptancePolicy, ErrorHandler, RequestError, ResponseObserver, ResponseSnapshot,
};

use crate::classify::{classify_failure, notify_failure, resolve_handler};
use crate::error::TriageError;
use crate::registry;

/// Interceptor configured with an acceptance policy and optional per-instance
/// handler and observer
///
/// Redirect handling has no canonical default, so construction requires an
/// explicit [`AcceptancePolicy`]; see [`AcceptancePolicy::success`] and
/// [`AcceptancePolicy::success_and_redirects`].
#[derive(Clone)]
pub struct Triage {
    acceptance: AcceptancePolicy,
    handler: Option<Arc<dyn ErrorHandler>>,
    observer: Option<Arc<dyn ResponseObserver>>,
}

impl Triage {
    /// Create an interceptor for the given acceptance policy
    pub fn new(acceptance: AcceptancePolicy) -> Self {
        Self {
            acceptance,
            handler: None,
            observer: None,
        }
    }

    /// Use this handler instead of the process-wide default
    #[must_use]
    pub fn with_handler(mut self, handler: Arc<dyn ErrorHandler>) -> Self {
        self.handler = Some(handler);
        self
    }

    /// Use this observer instead of the process-wide default
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ResponseObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Process a completed outcome
    ///
    /// Accepted responses pass through unchanged (the handler's and
    /// observer's success hooks fire for observation). A response outside the
    /// acceptance policy is converted to a status failure before
    /// classification; failures are classified, messaged, and re-surfaced.
    /// Never swallows a failure.
    pub fn process(
        &self,
        outcome: Result<ResponseSnapshot, RequestError>,
    ) -> Result<ResponseSnapshot, TriageError> {
        let handler = resolve_handler(self.handler.as_ref())?;
        let observer = self.observer.clone().or_else(registry::default_observer);

        let cause = match outcome {
            Ok(response) => match response.require_status(&self.acceptance) {
                Ok(response) => {
                    handler.on_success(&response);
                    if let Some(observer) = &observer {
                        observer.on_success(&response);
                    }
                    return Ok(response);
                }
                Err(cause) => cause,
            },
            Err(cause) => cause,
        };

        let classified = classify_failure(cause, handler.as_ref());
        if let Some(observer) = &observer {
            notify_failure(observer.as_ref(), &classified);
        }

        Err(TriageError::Classified(classified))
    }
}

impl std::fmt::Debug for Triage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Triage")
            .field("acceptance", &self.acceptance)
            .field("handler", &self.handler.as_ref().map(|_| "<handler>"))
            .field("observer", &self.observer.as_ref().map(|_| "<observer>"))
            .finish()
    }
}
