//! Error-channel adapters for streams and futures
//!
//! Success items are forwarded untouched; only the error channel is mapped,
//! using the same classification function as every other adapter.

use std::future::Future;
use std::sync::Arc;

use futures_util::{Stream, StreamExt};
use triage_core::{
    AcceptancePolicy, ErrorHandler, RequestError, ResponseSnapshot,
};

use crate::classify::classify_into;
use crate::error::TriageError;

/// Classify failures arriving on a stream's error channel
pub trait TriageStreamExt<T>: Stream<Item = Result<T, RequestError>> + Sized {
    /// Map every failure to its classified, messaged form
    ///
    /// The handler is resolved per failure: the explicit one when given,
    /// otherwise the process-wide default at the time the failure arrives.
    fn classify_errors(
        self,
        handler: Option<Arc<dyn ErrorHandler>>,
    ) -> impl Stream<Item = Result<T, TriageError>> {
        self.map(move |item| item.map_err(|cause| classify_into(cause, handler.as_ref())))
    }
}

impl<S, T> TriageStreamExt<T> for S where S: Stream<Item = Result<T, RequestError>> + Sized {}

/// Status filtering for streams of responses
pub trait ResponseStreamExt: Stream<Item = Result<ResponseSnapshot, RequestError>> + Sized {
    /// Convert responses outside `policy` into status failures
    ///
    /// Combine with [`TriageStreamExt::classify_errors`] to message the
    /// rejections.
    fn filter_statuses(
        self,
        policy: AcceptancePolicy,
    ) -> impl Stream<Item = Result<ResponseSnapshot, RequestError>> {
        self.map(move |item| item.and_then(|response| response.require_status(&policy)))
    }
}

impl<S> ResponseStreamExt for S where
    S: Stream<Item = Result<ResponseSnapshot, RequestError>> + Sized
{
}

/// Classify the failure of a single pending outcome
pub trait TriageFutureExt<T>: Future<Output = Result<T, RequestError>> + Sized {
    /// Map the future's failure to its classified, messaged form
    fn classify_err(
        self,
        handler: Option<Arc<dyn ErrorHandler>>,
    ) -> impl Future<Output = Result<T, TriageError>> {
        async move { self.await.map_err(|cause| classify_into(cause, handler.as_ref())) }
    }
}

impl<F, T> TriageFutureExt<T> for F where F: Future<Output = Result<T, RequestError>> + Sized {}
