//! Top-level error surfaced by the integration adapters

use thiserror::Error;
use triage_core::ClassifiedError;

/// Error returned by every adapter entry point
///
/// A missing handler is a caller configuration error, kept distinct from the
/// four classification categories so it can never be mistaken for an unknown
/// failure.
#[derive(Debug, Error)]
pub enum TriageError {
    /// A failure that was classified and messaged
    #[error(transparent)]
    Classified(#[from] ClassifiedError),

    /// No handler was supplied and no process-wide default is registered
    #[error("no error handler configured; register one with `set_default_handler` or pass one explicitly")]
    HandlerNotConfigured,
}
