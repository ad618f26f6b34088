//! Process-wide default handler and observer registers
//!
//! Each register is a single swappable `Arc`. Readers clone the `Arc` once
//! per call, so a classification call always observes one entire policy
//! instance even when a replacement races it. Last write wins; `None`
//! disables implicit defaulting.

use std::sync::{Arc, RwLock};

use triage_core::{ErrorHandler, ResponseObserver};

static DEFAULT_HANDLER: RwLock<Option<Arc<dyn ErrorHandler>>> = RwLock::new(None);
static DEFAULT_OBSERVER: RwLock<Option<Arc<dyn ResponseObserver>>> = RwLock::new(None);

/// Replace the process-wide default error handler
///
/// Passing `None` disables implicit defaulting: callers must then supply a
/// handler explicitly or receive [`crate::TriageError::HandlerNotConfigured`].
pub fn set_default_handler(handler: Option<Arc<dyn ErrorHandler>>) {
    let configured = handler.is_some();
    *DEFAULT_HANDLER
        .write()
        .expect("default handler register poisoned") = handler;
    tracing::debug!(configured, "default error handler replaced");
}

/// The currently registered default error handler
pub fn default_handler() -> Option<Arc<dyn ErrorHandler>> {
    DEFAULT_HANDLER
        .read()
        .expect("default handler register poisoned")
        .clone()
}

/// Replace the process-wide default observer
pub fn set_default_observer(observer: Option<Arc<dyn ResponseObserver>>) {
    let configured = observer.is_some();
    *DEFAULT_OBSERVER
        .write()
        .expect("default observer register poisoned") = observer;
    tracing::debug!(configured, "default response observer replaced");
}

/// The currently registered default observer
pub fn default_observer() -> Option<Arc<dyn ResponseObserver>> {
    DEFAULT_OBSERVER
        .read()
        .expect("default observer register poisoned")
        .clone()
}
