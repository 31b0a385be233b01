//! Property tests over randomized configurations
//!
//! Trace capture is left out of the randomized space: backtrace rendering is
//! slow and its text differs run to run, while everything else about a
//! descent is expected to be bit-for-bit repeatable.

use proptest::prelude::*;

use construct_probes::unwind::DescentConfig;

use crate::common::MAX_TEST_DEPTH;

/// Project a run onto its comparable outcome: control flow, step count,
/// interception depth, and either the diagnostic or the failure message.
fn observe(config: &DescentConfig) -> (bool, Option<u32>, Option<u32>, String) {
    match config.run() {
        Ok(outcome) => (
            true,
            Some(outcome.steps),
            outcome.intercepted_at,
            outcome.diagnostic,
        ),
        Err(failure) => (false, None, None, failure.message().to_string()),
    }
}

proptest! {
    #[test]
    fn clean_descents_count_their_steps(depth in 0u32..=MAX_TEST_DEPTH) {
        let outcome = DescentConfig::plain(depth, false).run().unwrap();
        prop_assert_eq!(outcome.steps, depth);
        prop_assert_eq!(outcome.intercepted_at, None);
    }

    #[test]
    fn handled_throws_intercept_one_frame_above_the_bottom(depth in 1u32..=MAX_TEST_DEPTH) {
        let config = DescentConfig {
            break_depth: depth,
            throw_at_bottom: true,
            log_on_unwind: false,
            capture_trace: false,
            handle_at_bottom: true,
        };
        let outcome = config.run().unwrap();
        prop_assert_eq!(outcome.intercepted_at, Some(depth - 1));
        prop_assert_eq!(outcome.steps, depth);
    }

    #[test]
    fn unhandled_throws_reach_the_caller(depth in 1u32..=256, log in any::<bool>()) {
        let config = DescentConfig {
            break_depth: depth,
            throw_at_bottom: true,
            log_on_unwind: log,
            capture_trace: false,
            handle_at_bottom: false,
        };
        prop_assert!(config.run().is_err());
    }

    #[test]
    fn control_flow_outcome_is_idempotent(
        depth in 0u32..=128,
        throw in any::<bool>(),
        log in any::<bool>(),
        handle in any::<bool>(),
    ) {
        let config = DescentConfig {
            break_depth: depth,
            throw_at_bottom: throw,
            log_on_unwind: log,
            capture_trace: false,
            handle_at_bottom: handle,
        };
        prop_assert_eq!(observe(&config), observe(&config));
    }
}
