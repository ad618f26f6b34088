#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

//! Core data model for HTTP outcome triage
//!
//! Defines the read-only request/response snapshots, the status acceptance
//! policy, the closed transport/decode failure unions, the classified error
//! taxonomy, and the handler/observer trait seams. Contains no I/O; the
//! classification engine and integration adapters live in `triage-http`.

pub mod error;
pub mod handler;
pub mod snapshot;
pub mod status;
pub mod transport;

pub use error::{ClassifiedError, DecodeError, RequestError};
pub use handler::{ErrorHandler, ResponseObserver};
pub use snapshot::{RequestSnapshot, ResponseSnapshot};
pub use status::{AcceptancePolicy, StatusRange};
pub use transport::{NetworkError, TransportError};
