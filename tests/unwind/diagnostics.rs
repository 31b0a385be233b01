//! Content of the diagnostic string: cause formatting, trace capture, and
//! their concatenation.

use std::io;

use construct_probes::error::ProbeFailure;
use construct_probes::unwind::{descend_with_diagnostics, DescentConfig, FAILURE_MESSAGE};

use crate::common::init_tracing;

fn handled(break_depth: u32, log_on_unwind: bool, capture_trace: bool) -> DescentConfig {
    DescentConfig {
        break_depth,
        throw_at_bottom: true,
        log_on_unwind,
        capture_trace,
        handle_at_bottom: true,
    }
}

#[test]
fn describe_failure_is_empty_without_flags() {
    let config = DescentConfig::plain(3, true);
    let failure = ProbeFailure::new(FAILURE_MESSAGE);
    assert_eq!(config.describe_failure(&failure), "");
}

#[test]
fn log_only_renders_nothing_for_a_causeless_failure() {
    init_tracing();
    // The descent raises its failure without a nested cause, so the logged
    // detail is the no-op string.
    let rendered = descend_with_diagnostics(&handled(3, true, false)).unwrap();
    assert_eq!(rendered, "");
}

#[test]
fn log_only_renders_the_cause_chain_when_present() {
    let config = handled(3, true, false);
    let inner = io::Error::new(io::ErrorKind::Other, "inner detail");
    let failure = ProbeFailure::with_cause(FAILURE_MESSAGE, inner);

    let rendered = config.describe_failure(&failure);
    assert_eq!(rendered, failure.cause_detail());
    assert!(rendered.contains("inner detail"));
}

#[test]
fn trace_capture_renders_a_non_empty_backtrace() {
    let rendered = descend_with_diagnostics(&handled(3, false, true)).unwrap();
    assert!(!rendered.is_empty());
}

#[test]
fn log_and_trace_concatenate_in_order() {
    let config = handled(3, true, true);
    let inner = io::Error::new(io::ErrorKind::Other, "inner detail");
    let failure = ProbeFailure::with_cause(FAILURE_MESSAGE, inner);

    let rendered = config.describe_failure(&failure);
    assert!(rendered.starts_with(&failure.cause_detail()));
    assert!(rendered.len() > failure.cause_detail().len());
}

#[test]
fn diagnostics_from_unhandled_descents_are_discarded() {
    // Intermediate frames format and re-raise; nothing of the diagnostic
    // survives to the caller.
    let config = DescentConfig {
        handle_at_bottom: false,
        ..handled(3, true, false)
    };
    let failure = descend_with_diagnostics(&config).unwrap_err();
    assert_eq!(failure.message(), FAILURE_MESSAGE);
    assert_eq!(failure.cause_detail(), "");
}
