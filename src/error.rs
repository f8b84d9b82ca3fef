use crate::{FactoryError, PoolHandle};
use thiserror::Error;

/// Errors returned by [`ObjectPool`](crate::ObjectPool) operations.
#[derive(Debug, Error)]
pub enum PoolError {
    /// The factory failed while the pool was warming up. No pool was built.
    #[error("factory failed during warm-up after {created} of {requested} objects")]
    Construction {
        /// Warm-up size the pool was asked for.
        requested: usize,
        /// Objects created before the failure.
        created: usize,
        /// Error reported by the factory.
        #[source]
        source: FactoryError,
    },

    /// The factory failed while the pool grew to satisfy a spawn.
    ///
    /// The pool is left exactly as it was before the spawn.
    #[error("factory failed while growing pool past {total} objects")]
    Growth {
        /// Objects held by the pool when growth was attempted.
        total: usize,
        /// Error reported by the factory.
        #[source]
        source: FactoryError,
    },

    /// The pool is out of idle objects and its growth policy forbids
    /// creating more.
    #[error("pool exhausted: growth is capped at {limit} objects")]
    Exhausted {
        /// Maximum number of objects the pool may hold.
        limit: usize,
    },

    /// The handle is not currently on loan from this pool: it was already
    /// despawned, or it belongs to another pool.
    #[error("{handle} is not on loan from this pool")]
    InvalidDespawn {
        /// The rejected handle.
        handle: PoolHandle,
    },

    /// The growth cap is smaller than the warm-up size.
    #[error("capacity hint {capacity_hint} exceeds growth limit {limit}")]
    InvalidConfig {
        /// Requested warm-up size.
        capacity_hint: usize,
        /// Configured growth limit.
        limit: usize,
    },
}
