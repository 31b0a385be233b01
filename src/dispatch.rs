//! Dispatch probe: trait objects vs. generics vs. composition
//!
//! The same trivial read is exposed through three call shapes so the benches
//! can price the dispatch mechanism alone:
//! - a concrete call the optimizer can see through,
//! - a call through `&dyn Gauge` behind a helper, which cannot be
//!   devirtualized,
//! - a monomorphized generic call.
//!
//! The composition pair reads through a plainly embedded struct with no trait
//! in sight, as the layering baseline.

/// Reading shared by the trait implementors
const BASE_READING: i64 = 10;

/// A gauge that can be read
pub trait Gauge {
    /// Current reading
    fn read(&self) -> i64;
}

/// Gauge that reports the shared base reading
#[derive(Debug, Default)]
pub struct TareGauge;

impl Gauge for TareGauge {
    fn read(&self) -> i64 {
        BASE_READING
    }
}

/// Gauge layering its own offset on the base reading
#[derive(Debug)]
pub struct SpanGauge {
    /// Offset added on top of the base reading
    pub offset: i64,
}

impl Gauge for SpanGauge {
    fn read(&self) -> i64 {
        BASE_READING + self.offset
    }
}

/// Composition counterpart of [`TareGauge`]: a bare cell, no trait
#[derive(Debug)]
pub struct RawCell {
    /// Stored reading
    pub value: i64,
}

impl RawCell {
    /// Current reading
    pub fn read(&self) -> i64 {
        self.value
    }
}

/// Composition counterpart of [`SpanGauge`]: embeds the cell directly
#[derive(Debug)]
pub struct CompositeCell {
    /// Own contribution to the reading
    pub value: i64,
    /// Embedded cell supplying the rest
    pub inner: RawCell,
}

impl CompositeCell {
    /// Sum of the own value and the embedded cell's reading
    pub fn read(&self) -> i64 {
        self.value + self.inner.read()
    }
}

/// Sum two readings through trait objects
///
/// The indirection through `&dyn` keeps the calls virtual even when the
/// caller knows the concrete types.
pub fn read_pair_dyn(first: &dyn Gauge, second: &dyn Gauge) -> i64 {
    first.read() + second.read()
}

/// Monomorphized counterpart of [`read_pair_dyn`]
pub fn read_pair_generic(first: &impl Gauge, second: &impl Gauge) -> i64 {
    first.read() + second.read()
}

/// Type reached only through the trait, for the interface-overhead pair
#[derive(Debug, Default)]
pub struct TraitDoer;

impl Gauge for TraitDoer {
    fn read(&self) -> i64 {
        15
    }
}

/// Identical work as [`TraitDoer`] behind an inherent method
#[derive(Debug, Default)]
pub struct InherentDoer;

impl InherentDoer {
    /// Same fixed reading, no trait involved
    pub fn read(&self) -> i64 {
        16
    }
}
