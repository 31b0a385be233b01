//! Depth-parameterized unwind probe
//!
//! ## Design
//!
//! A deterministic recursive call chain used as a timing subject. The chain
//! descends to a configured depth, optionally raises a failure at the bottom,
//! and optionally performs diagnostic work at the point where the failure is
//! intercepted. Its only externally observable effect is returning normally
//! or surfacing the failure.
//!
//! Failure propagation is explicit: frames thread a `Result` back up the
//! chain. A frame that wraps its recursive call in a `match` is an
//! interception region; a frame that simply forwards the result has none,
//! and a failure passes straight through it. The non-throwing descent is the
//! baseline: the identical number of calls with no interception anywhere,
//! isolating call-depth cost from failure-propagation cost.
//!
//! ## Depth bounds
//!
//! The descent is bounded only by `break_depth`; there is no safety cutoff
//! against the native stack limit. Callers own picking depths the platform
//! can hold, which matters doubly when `capture_trace` is set since the
//! backtrace is rendered while every frame is still live.

use std::backtrace::Backtrace;

use serde::{Deserialize, Serialize};

use crate::error::{ProbeFailure, Result};

/// Message carried by every deliberately-raised probe failure
pub const FAILURE_MESSAGE: &str = "Catch me!";

/// Configuration for one recursive descent
///
/// All fields are required; there are no implicit defaults hidden in call
/// sites. The value is consumed within a single synchronous call chain and
/// nothing outlives the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescentConfig {
    /// Depth at which the chain stops descending
    pub break_depth: u32,
    /// Whether the terminal frame raises a failure
    pub throw_at_bottom: bool,
    /// Whether interception formats the failure's nested-cause detail
    pub log_on_unwind: bool,
    /// Whether interception captures a full backtrace rendering
    pub capture_trace: bool,
    /// Swallow at the first frame above the throw point, rather than
    /// propagating to the original caller
    pub handle_at_bottom: bool,
}

impl DescentConfig {
    /// Config with every diagnostic flag off
    ///
    /// No frame wraps its call, so a raised failure unwinds through every
    /// frame to the original caller.
    pub fn plain(break_depth: u32, throw_at_bottom: bool) -> Self {
        Self {
            break_depth,
            throw_at_bottom,
            log_on_unwind: false,
            capture_trace: false,
            handle_at_bottom: false,
        }
    }

    /// Whether non-terminal frames wrap their recursive call in an
    /// interception region
    fn wraps_frames(&self) -> bool {
        self.log_on_unwind || self.capture_trace || self.handle_at_bottom
    }

    /// Run the descent from depth 0
    ///
    /// Returns the outcome of a completed descent, or the failure when it is
    /// configured to reach the caller. A failure swallowed in-chain
    /// (`handle_at_bottom`) is reported through the outcome instead.
    pub fn run(&self) -> Result<DescentOutcome> {
        self.descend_from(0)
    }

    fn descend_from(&self, depth: u32) -> Result<DescentOutcome> {
        if depth >= self.break_depth {
            // Terminal frame: return clean or raise.
            if self.throw_at_bottom {
                return Err(ProbeFailure::new(FAILURE_MESSAGE));
            }
            return Ok(DescentOutcome {
                steps: depth,
                intercepted_at: None,
                diagnostic: String::new(),
            });
        }

        if !self.wraps_frames() {
            // No interception region: a failure from below passes straight
            // through this frame.
            return self.descend_from(depth + 1);
        }

        match self.descend_from(depth + 1) {
            Ok(outcome) => Ok(outcome),
            Err(failure) => {
                let diagnostic = self.describe_failure(&failure);
                if self.log_on_unwind {
                    tracing::debug!(depth, failure = %failure, "intercepted probe failure");
                }
                if self.handle_at_bottom {
                    // First frame above the throw point swallows the failure;
                    // frames further up see a clean unwind.
                    Ok(DescentOutcome {
                        steps: self.break_depth,
                        intercepted_at: Some(depth),
                        diagnostic,
                    })
                } else {
                    // Diagnostics are discarded and the failure re-raised
                    // unchanged, so every frame up the chain repeats this.
                    Err(failure)
                }
            }
        }
    }

    /// Format whichever diagnostics this config requests
    ///
    /// Empty when neither flag applies. Concatenation is deliberately direct
    /// rather than through a pre-sized buffer; the inefficiency is part of
    /// what the diagnostic variants measure. The backtrace is captured
    /// synchronously, while the descent frames are still on the stack.
    pub fn describe_failure(&self, failure: &ProbeFailure) -> String {
        let mut rendered = String::new();
        if self.log_on_unwind {
            rendered = rendered + &failure.cause_detail();
        }
        if self.capture_trace {
            rendered = rendered + &Backtrace::force_capture().to_string();
        }
        rendered
    }
}

/// What a completed descent reports
///
/// Only produced when the chain unwinds cleanly or the failure was swallowed
/// in-chain; a propagated failure carries no outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescentOutcome {
    /// Recursive steps taken to reach the terminal frame
    pub steps: u32,
    /// Depth of the frame that swallowed the failure, if any
    pub intercepted_at: Option<u32>,
    /// Diagnostic text gathered at the swallowing frame, empty unless a
    /// diagnostic flag was set
    pub diagnostic: String,
}

/// Zero-diagnostic entry point
///
/// Descends with no interception region anywhere. With `throw_at_bottom` the
/// failure surfaces here, and intercepting it is the caller's job; without it
/// this is the pure call-depth baseline.
pub fn descend(break_depth: u32, throw_at_bottom: bool) -> Result<()> {
    DescentConfig::plain(break_depth, throw_at_bottom)
        .run()
        .map(|_| ())
}

/// Full-diagnostic entry point
///
/// Returns the diagnostic string gathered at the swallowing frame, which is
/// empty unless `handle_at_bottom` is set together with a diagnostic flag.
/// When `handle_at_bottom` is off, intermediate frames still perform the
/// configured diagnostic work but the failure itself reaches the caller.
pub fn descend_with_diagnostics(config: &DescentConfig) -> Result<String> {
    config.run().map(|outcome| outcome.diagnostic)
}
