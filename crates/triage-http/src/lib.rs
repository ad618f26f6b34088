#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! HTTP outcome classification and error translation
//!
//! Sits between a request pipeline and application code: every low-level
//! failure (transport trouble, rejected status code, body-decode failure,
//! anything else) is classified into one of four categories and paired with a
//! user-facing message produced by a caller-supplied [`ErrorHandler`].
//!
//! Three call-site shapes share one classification function:
//!
//! - [`Triage::process`] intercepts a completed outcome before the completion
//!   path sees it
//! - [`TriageStreamExt::classify_errors`] / [`TriageFutureExt::classify_err`]
//!   map the error channel of a stream or future
//! - [`classify`] converts an already-caught error ad hoc
//!
//! A process-wide default handler can be registered with
//! [`set_default_handler`]; an explicit per-call handler always wins. When
//! neither is available the call fails with
//! [`TriageError::HandlerNotConfigured`] rather than guessing.

mod classify;
mod error;
mod intercept;
mod observe;
mod registry;
#[cfg(feature = "reqwest")]
mod reqwest;
mod stream;

pub use classify::{classify, classify_failure};
pub use error::TriageError;
pub use intercept::Triage;
pub use observe::TracingObserver;
pub use registry::{default_handler, default_observer, set_default_handler, set_default_observer};
#[cfg(feature = "reqwest")]
pub use reqwest::from_reqwest;
pub use stream::{ResponseStreamExt, TriageFutureExt, TriageStreamExt};

pub use triage_core::{
    AcceptancePolicy, ClassifiedError, DecodeError, ErrorHandler, NetworkError, RequestError,
    RequestSnapshot, ResponseObserver, ResponseSnapshot, StatusRange, TransportError,
};
