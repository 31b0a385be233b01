//! Closure probe: capture shape and per-call allocation
//!
//! A linear find over a pool of identifiers, driven by a caller-supplied
//! predicate in three shapes:
//! - generic `impl Fn`: monomorphized, no allocation;
//! - `&dyn Fn`: dynamic dispatch, still no allocation;
//! - `Box<dyn Fn>`: the caller boxes a capturing closure per call, which is
//!   the accidental-allocation pattern the benches price.
//!
//! The fixture mirrors the common shape of the mistake: the predicate drags a
//! locally-constructed holder into its environment when the shared, lazily
//! built one would have done.

use once_cell::sync::Lazy;
use uuid::Uuid;

/// Number of identifiers scanned per probe call
pub const POOL_SIZE: usize = 1024;

/// Slots in an [`IdHolder`]
pub const HOLDER_SLOTS: usize = 44;

/// Bundle of identifiers whose final slot is the search target
#[derive(Debug, Clone)]
pub struct IdHolder {
    /// Identifier slots; all random except the sentinel in the last slot
    pub ids: [Uuid; HOLDER_SLOTS],
}

impl IdHolder {
    /// Build a holder with random identifiers and a nil sentinel at the end
    pub fn generate() -> Self {
        let mut ids = [Uuid::nil(); HOLDER_SLOTS];
        for slot in ids.iter_mut().take(HOLDER_SLOTS - 1) {
            *slot = Uuid::new_v4();
        }
        Self { ids }
    }

    /// The identifier the probes search for
    pub fn target(&self) -> Uuid {
        self.ids[HOLDER_SLOTS - 1]
    }
}

/// Shared holder for the capture-free search path
pub static SHARED_HOLDER: Lazy<IdHolder> = Lazy::new(IdHolder::generate);

/// Fill a pool with random identifiers, planting the sentinel in the last slot
pub fn fill_pool(pool: &mut [Uuid]) {
    for slot in pool.iter_mut() {
        *slot = Uuid::new_v4();
    }
    if let Some(last) = pool.last_mut() {
        *last = Uuid::nil();
    }
}

/// Find via a monomorphized predicate
pub fn find_generic(pool: &[Uuid], matches: impl Fn(&Uuid) -> bool) -> Option<usize> {
    pool.iter().position(matches)
}

/// Find via a dynamically dispatched, borrowed predicate
pub fn find_dyn(pool: &[Uuid], matches: &dyn Fn(&Uuid) -> bool) -> Option<usize> {
    pool.iter().position(matches)
}

/// Find via a predicate boxed by the caller
///
/// The box itself is the cost under test: building one per call from a
/// capturing closure allocates every time.
pub fn find_boxed(pool: &[Uuid], matches: Box<dyn Fn(&Uuid) -> bool + '_>) -> Option<usize> {
    pool.iter().position(|id| matches(id))
}
