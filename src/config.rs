#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What a pool does when a spawn finds no idle object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum GrowthPolicy {
    /// Create a new object through the factory. The first growth past
    /// warm-up is logged as a warning.
    #[default]
    Unbounded,
    /// Create new objects until the pool holds `limit` of them, then fail
    /// with [`PoolError::Exhausted`](crate::PoolError::Exhausted).
    Capped {
        /// Maximum number of objects the pool may ever hold.
        limit: usize,
    },
}

impl GrowthPolicy {
    /// Whether a pool currently holding `total` objects may create another.
    #[inline]
    pub fn allows(&self, total: usize) -> bool {
        match *self {
            GrowthPolicy::Unbounded => true,
            GrowthPolicy::Capped { limit } => total < limit,
        }
    }
}

/// Construction-time tuning of an [`ObjectPool`](crate::ObjectPool).
///
/// The default is a fully lazy pool (no warm-up) with unbounded growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PoolConfig {
    /// Number of objects created eagerly when the pool is built.
    pub capacity_hint: usize,
    /// Policy applied once the warm-up objects are all on loan.
    pub growth: GrowthPolicy,
}

impl PoolConfig {
    /// Sets the warm-up size.
    pub fn with_capacity_hint(mut self, capacity_hint: usize) -> Self {
        self.capacity_hint = capacity_hint;
        self
    }

    /// Sets the growth policy.
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }
}
