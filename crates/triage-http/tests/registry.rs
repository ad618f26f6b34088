//! Process-wide default register behavior
//!
//! These tests mutate global state and run serially.

use std::sync::Arc;
use std::sync::Barrier;

use serial_test::serial;
use triage_http::{
    AcceptancePolicy, ClassifiedError, DecodeError, ErrorHandler, NetworkError, RequestError,
    RequestSnapshot, ResponseSnapshot, Triage, TriageError, TransportError, classify,
    set_default_handler,
};

/// Handler answering every category with one fixed label
struct Fixed(&'static str);

impl ErrorHandler for Fixed {
    fn status_error(
        &self,
        _status: u16,
        _request: Option<&RequestSnapshot>,
        _response: Option<&ResponseSnapshot>,
    ) -> String {
        self.0.to_owned()
    }

    fn network_error(&self, _error: &NetworkError) -> String {
        self.0.to_owned()
    }

    fn decode_error(&self, _error: &DecodeError) -> String {
        self.0.to_owned()
    }

    fn unknown_error(&self, _error: &anyhow::Error) -> String {
        self.0.to_owned()
    }
}

#[test]
#[serial]
fn registered_default_is_used_when_no_explicit_handler_is_given() {
    set_default_handler(Some(Arc::new(Fixed("default"))));

    let classified = classify(RequestError::Transport(TransportError::TimedOut), None)
        .expect("default registered");
    assert_eq!(classified.message(), "default");

    set_default_handler(None);
}

#[test]
#[serial]
fn last_write_wins() {
    set_default_handler(Some(Arc::new(Fixed("first"))));
    set_default_handler(Some(Arc::new(Fixed("second"))));

    let classified = classify(RequestError::Transport(TransportError::TimedOut), None)
        .expect("default registered");
    assert_eq!(classified.message(), "second");

    set_default_handler(None);
}

#[test]
#[serial]
fn missing_handler_is_a_configuration_error_not_an_unknown_failure() {
    set_default_handler(None);

    let adhoc = classify(RequestError::Transport(TransportError::TimedOut), None);
    assert!(matches!(adhoc, Err(TriageError::HandlerNotConfigured)));

    let triage = Triage::new(AcceptancePolicy::success());
    let url = url::Url::parse("https://api.example.com/").expect("valid url");
    let intercepted = triage.process(Ok(ResponseSnapshot::new(204, url)));
    match intercepted {
        Err(TriageError::HandlerNotConfigured) => {}
        Err(TriageError::Classified(ClassifiedError::Unknown { .. })) => {
            panic!("configuration error must not be classified as unknown")
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
#[serial]
fn concurrent_classification_observes_one_whole_policy() {
    const THREADS: usize = 8;
    const CALLS: usize = 125;

    set_default_handler(Some(Arc::new(Fixed("P1"))));
    let start = Barrier::new(THREADS + 1);

    std::thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                start.wait();
                for _ in 0..CALLS {
                    let classified =
                        classify(RequestError::Transport(TransportError::TimedOut), None)
                            .expect("a default is registered throughout");
                    // Each call sees exactly one policy, never a mixture.
                    assert!(matches!(classified.message(), "P1" | "P2"));
                }
            });
        }
        scope.spawn(|| {
            start.wait();
            set_default_handler(Some(Arc::new(Fixed("P2"))));
        });
    });

    // The swap completed before the scope ended, so calls issued now see P2.
    let classified = classify(RequestError::Transport(TransportError::TimedOut), None)
        .expect("default registered");
    assert_eq!(classified.message(), "P2");

    set_default_handler(None);
}
