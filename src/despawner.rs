use crate::PoolHandle;
use alloc::{fmt, sync::Arc};
use crossbeam_queue::SegQueue;

/// A cloneable handle for requesting despawns without borrowing the pool.
///
/// Timer, collision and network callbacks usually run while the pool is
/// borrowed elsewhere, or on another thread. They push the handle here and
/// the pool owner applies every pending request with
/// [`ObjectPool::flush_despawns`](crate::ObjectPool::flush_despawns),
/// typically once per frame.
///
/// The queue is lock-free and unbounded, so `request` never blocks or fails.
#[derive(Clone, Default)]
pub struct Despawner {
    queue: Arc<SegQueue<PoolHandle>>,
}

impl Despawner {
    pub(crate) fn new() -> Self {
        Despawner::default()
    }

    /// Queues a despawn of `handle` for the next flush.
    #[inline]
    pub fn request(&self, handle: PoolHandle) {
        self.queue.push(handle);
    }

    /// Number of requests waiting for the next flush.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[inline]
    pub(crate) fn pop(&self) -> Option<PoolHandle> {
        self.queue.pop()
    }
}

impl fmt::Debug for Despawner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Despawner")
            .field("pending", &self.queue.len())
            .finish()
    }
}

/// Outcome of [`ObjectPool::flush_despawns`](crate::ObjectPool::flush_despawns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlushStats {
    /// Requests that returned an object to the pool.
    pub despawned: usize,
    /// Requests naming an object that was not on loan, usually a second
    /// request for the same object within one frame.
    pub rejected: usize,
}
