//! Micro-benchmarks comparing the runtime cost of Rust language constructs
//!
//! Each module is an independent probe family with no shared state:
//! - unwind: recursion depth and failure-propagation cost
//! - dispatch: trait-object dispatch vs. generics vs. composition
//! - closures: closure capture and per-call allocation
//! - slicing: allocating string splits vs. borrowed subslices, JSON decoding
//! - tuples: boxed pairs vs. inline pairs
//! - futures: already-ready vs. suspending awaitables
//!
//! A probe has no business purpose beyond being timed. The functions here do a
//! fixed amount of deliberately trivial work so that timing differences are
//! attributable to the single construct under test; the criterion targets in
//! `benches/` drive them.
//!
//! Probes never retain state between invocations. Anything a caller passes in
//! is consumed within one synchronous (or one awaited) call chain.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod closures;
pub mod dispatch;
pub mod error;
pub mod futures;
pub mod slicing;
pub mod tuples;
pub mod unwind;

// Re-export the types callers touch most
pub use error::{ProbeFailure, Result};
pub use unwind::{descend, descend_with_diagnostics, DescentConfig, DescentOutcome};
