//! The classification engine shared by every adapter
//!
//! Branch order is load-bearing: status rejection, then decode failures, then
//! transport failures, then everything else. A decode failure whose text
//! mentions transport trouble is still a decode failure; classification is by
//! structural cause, never by message content.

use std::sync::Arc;

use triage_core::{ClassifiedError, ErrorHandler, NetworkError, RequestError, ResponseObserver};

use crate::error::TriageError;
use crate::registry;

/// Classify a pipeline failure and dispatch to `handler` for its message
///
/// Every adapter funnels through this function; the original cause is always
/// preserved in the classified value for programmatic inspection.
pub fn classify_failure(cause: RequestError, handler: &dyn ErrorHandler) -> ClassifiedError {
    let classified = match cause {
        RequestError::Status(response) => {
            let status = response.status();
            let request = response.request().cloned();
            let message = handler.status_error(status, request.as_ref(), Some(&response));
            ClassifiedError::Status {
                message,
                status,
                request,
                response: Some(response),
            }
        }
        RequestError::Decode(cause) => {
            let message = handler.decode_error(&cause);
            ClassifiedError::Decode { message, cause }
        }
        RequestError::Transport(error) => {
            let cause = NetworkError::classify(error);
            let message = handler.network_error(&cause);
            ClassifiedError::Network { message, cause }
        }
        RequestError::Other(cause) => {
            let message = handler.unknown_error(&cause);
            ClassifiedError::Unknown { message, cause }
        }
    };

    tracing::debug!(category = classified.category(), "classified request failure");
    classified
}

/// Ad-hoc conversion adapter: classify an already-caught error
///
/// Uses the explicit handler when given, falling back to the process-wide
/// default.
pub fn classify(
    cause: RequestError,
    handler: Option<&Arc<dyn ErrorHandler>>,
) -> Result<ClassifiedError, TriageError> {
    let handler = resolve_handler(handler)?;
    Ok(classify_failure(cause, handler.as_ref()))
}

/// Resolve the active handler: explicit beats the registered default
pub(crate) fn resolve_handler(
    explicit: Option<&Arc<dyn ErrorHandler>>,
) -> Result<Arc<dyn ErrorHandler>, TriageError> {
    explicit
        .cloned()
        .or_else(registry::default_handler)
        .ok_or_else(|| {
            tracing::warn!("no error handler configured and none supplied at the call site");
            TriageError::HandlerNotConfigured
        })
}

/// Classify into the adapter error channel, folding a missing-handler
/// configuration error into the same channel
pub(crate) fn classify_into(
    cause: RequestError,
    handler: Option<&Arc<dyn ErrorHandler>>,
) -> TriageError {
    match classify(cause, handler) {
        Ok(classified) => TriageError::Classified(classified),
        Err(error) => error,
    }
}

/// Notify an observer of a classified failure
pub(crate) fn notify_failure(observer: &dyn ResponseObserver, classified: &ClassifiedError) {
    match classified {
        ClassifiedError::Network { cause, .. } => observer.on_network_error(cause),
        ClassifiedError::Status {
            status,
            request,
            response,
            ..
        } => observer.on_status_error(*status, request.as_ref(), response.as_ref()),
        ClassifiedError::Decode { cause, .. } => observer.on_decode_error(cause),
        ClassifiedError::Unknown { cause, .. } => observer.on_unknown_error(cause),
    }
}
