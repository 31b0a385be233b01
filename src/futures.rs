//! Futures probe: already-ready vs. suspending awaitables
//!
//! ## Design
//!
//! Every helper resolves to the same fixed value; what varies is how the
//! awaitable reaches the caller:
//! - `settled` / `settle_after(0)`: ready on first poll, no timer touched;
//! - `settle_after(delay)`: parks on the tokio timer before resolving;
//! - the `*_boxed` shapes move the same future behind `Pin<Box<dyn Future>>`,
//!   pricing the per-await heap allocation and dynamic dispatch;
//! - the alternating loops interleave ready and suspending awaits 1024 times,
//!   which is where the inline shape's avoided allocations accumulate.
//!
//! Suspension inside the loops goes through `yield_now` rather than the
//! timer, so a loop iteration costs one scheduler round-trip instead of a
//! millisecond floor.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use tokio::task::yield_now;
use tokio::time::sleep;

/// Value every probe future resolves to
pub const SETTLED: f64 = 100.0;

/// Awaits per alternating loop
pub const LOOP_AWAITS: usize = 1024;

/// Already-settled value behind an await point
pub async fn settled() -> f64 {
    SETTLED
}

/// Completes immediately for a zero delay, otherwise suspends on the timer
pub async fn settle_after(delay: Duration) -> f64 {
    if !delay.is_zero() {
        sleep(delay).await;
    }
    SETTLED
}

/// [`settled`] behind a heap allocation and a vtable
pub fn settled_boxed() -> Pin<Box<dyn Future<Output = f64> + Send>> {
    Box::pin(settled())
}

/// [`settle_after`] behind a heap allocation and a vtable
pub fn settle_after_boxed(delay: Duration) -> Pin<Box<dyn Future<Output = f64> + Send>> {
    Box::pin(settle_after(delay))
}

/// Ready on even ticks, suspends on odd ticks
pub async fn tick(index: usize) -> f64 {
    if index % 2 != 0 {
        yield_now().await;
    }
    SETTLED
}

/// Alternating awaits with the future held inline
pub async fn alternating_inline() -> f64 {
    let mut last = 0.0;
    for index in 0..LOOP_AWAITS {
        last = tick(index).await;
    }
    last
}

/// Alternating awaits with each future boxed first
pub async fn alternating_boxed() -> f64 {
    let mut last = 0.0;
    for index in 0..LOOP_AWAITS {
        last = Box::pin(tick(index)).await;
    }
    last
}
