use core::{
    fmt,
    sync::atomic::{AtomicUsize, Ordering},
};

static NEXT_POOL_ID: AtomicUsize = AtomicUsize::new(0);

/// Identity of one pool, used to reject handles issued by another pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct PoolId(usize);

impl PoolId {
    pub(crate) fn next() -> Self {
        PoolId(NEXT_POOL_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An opaque handle to an object on loan from an
/// [`ObjectPool`](crate::ObjectPool).
///
/// Handles are cheap to copy and compare by identity: two handles are equal
/// exactly when they name the same object of the same pool. A handle stays
/// meaningful for the lifetime of its pool, but only grants access to the
/// object while it is active.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolHandle {
    pool: PoolId,
    slot: usize,
}

impl PoolHandle {
    #[inline(always)]
    pub(crate) fn new(pool: PoolId, slot: usize) -> Self {
        PoolHandle { pool, slot }
    }

    #[inline(always)]
    pub(crate) fn pool(&self) -> PoolId {
        self.pool
    }

    /// Position of the object inside its pool.
    ///
    /// Slots are assigned in creation order and never reused for another
    /// object, which makes them usable as a dense index into side tables.
    #[inline(always)]
    pub fn slot(&self) -> usize {
        self.slot
    }
}

impl fmt::Debug for PoolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoolHandle({}:{})", self.pool.0, self.slot)
    }
}

impl fmt::Display for PoolHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "object #{} of pool #{}", self.slot, self.pool.0)
    }
}
