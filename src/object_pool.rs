use crate::{
    handle::PoolId, Despawner, Factory, FlushStats, GrowthPolicy, PoolConfig, PoolError,
    PoolHandle, SceneSink,
};
use alloc::{fmt, vec::Vec};
use core::mem;
use log::{debug, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SlotState {
    Available,
    // index of the slot inside `ObjectPool::active`
    Active { position: usize },
}

struct Slot<T> {
    obj: T,
    state: SlotState,
}

/// A pool of reusable scene objects owned by a single render or update loop.
///
/// Objects are created by a [`Factory`], registered once with a
/// [`SceneSink`], and from then on only toggled active and inactive as they
/// are spawned and despawned. Idle objects are kept on a LIFO stack so that
/// the most recently despawned object, still warm in cache, is reused first.
///
/// Every object ever created is either available or active; the pool never
/// discards one while it lives.
pub struct ObjectPool<T, F, S> {
    id: PoolId,
    factory: F,
    sink: S,
    slots: Vec<Slot<T>>,
    available: Vec<usize>,
    active: Vec<usize>,
    config: PoolConfig,
    grown: bool,
    despawner: Despawner,
}

impl<T, F, S> ObjectPool<T, F, S> {
    /// Gets the number of objects the pool has ever created.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Checks if the pool has not created any object yet.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Gets the number of idle objects ready to be spawned without growing.
    pub fn available_len(&self) -> usize {
        self.available.len()
    }

    /// Gets the number of objects currently on loan.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    /// Gets the warm-up size the pool was built with.
    pub fn capacity_hint(&self) -> usize {
        self.config.capacity_hint
    }

    /// Gets the policy applied when no idle object is left.
    pub fn growth_policy(&self) -> GrowthPolicy {
        self.config.growth
    }

    /// Borrows the factory.
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Borrows the scene sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrows the scene sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Checks whether `handle` names an object currently on loan from this
    /// pool.
    pub fn is_active(&self, handle: PoolHandle) -> bool {
        self.loan_position(handle).is_some()
    }

    /// Borrows the object behind `handle`.
    ///
    /// Returns `None` unless the object is currently on loan from this pool.
    pub fn get(&self, handle: PoolHandle) -> Option<&T> {
        self.loan_position(handle)?;
        Some(&self.slots[handle.slot()].obj)
    }

    /// Mutably borrows the object behind `handle`.
    ///
    /// Returns `None` unless the object is currently on loan from this pool.
    pub fn get_mut(&mut self, handle: PoolHandle) -> Option<&mut T> {
        self.loan_position(handle)?;
        Some(&mut self.slots[handle.slot()].obj)
    }

    /// Iterates over the active objects in no particular order.
    pub fn iter_active(&self) -> impl Iterator<Item = (PoolHandle, &T)> + '_ {
        self.active
            .iter()
            .map(move |&slot| (PoolHandle::new(self.id, slot), &self.slots[slot].obj))
    }

    /// Calls `f` on every active object, in no particular order.
    pub fn for_each_active_mut(&mut self, mut f: impl FnMut(PoolHandle, &mut T)) {
        for &slot in &self.active {
            f(PoolHandle::new(self.id, slot), &mut self.slots[slot].obj);
        }
    }

    /// Returns a handle that can queue despawns for this pool from callbacks
    /// or other threads. See [`Self::flush_despawns`].
    pub fn despawner(&self) -> Despawner {
        self.despawner.clone()
    }

    fn loan_position(&self, handle: PoolHandle) -> Option<usize> {
        if handle.pool() != self.id {
            return None;
        }
        match self.slots.get(handle.slot())?.state {
            SlotState::Active { position } => Some(position),
            SlotState::Available => None,
        }
    }
}

impl<T, F, S: SceneSink<T>> ObjectPool<T, F, S> {
    /// Returns an object to the pool.
    ///
    /// The object is deactivated through the scene sink and becomes the next
    /// object handed out by a spawn. Fails with
    /// [`PoolError::InvalidDespawn`] if `handle` is not on loan from this
    /// pool, in which case nothing is changed.
    pub fn despawn(&mut self, handle: PoolHandle) -> Result<(), PoolError> {
        let position = self
            .loan_position(handle)
            .ok_or(PoolError::InvalidDespawn { handle })?;
        self.release(position);
        trace!("despawned {}", handle);
        Ok(())
    }

    /// Returns every active object to the pool, e.g. on a level change.
    ///
    /// Returns the number of objects reclaimed.
    pub fn reset_all(&mut self) -> usize {
        let mut active = mem::take(&mut self.active);
        for &slot in &active {
            let entry = &mut self.slots[slot];
            self.sink.set_active(&mut entry.obj, false);
            entry.state = SlotState::Available;
        }
        let reclaimed = active.len();
        self.available.extend(active.drain(..));
        // hand the emptied buffer back so later spawns do not reallocate it
        self.active = active;
        debug!("object pool reset, {} objects reclaimed", reclaimed);
        reclaimed
    }

    /// Despawns every active object for which `predicate` returns `true`.
    ///
    /// Meant for the per-frame sweep of an update loop, where objects expire
    /// on their own (particle life, projectile range). Returns the number of
    /// objects despawned.
    pub fn despawn_if(&mut self, mut predicate: impl FnMut(&mut T) -> bool) -> usize {
        let mut despawned = 0;
        let mut position = 0;
        while position < self.active.len() {
            let slot = self.active[position];
            if predicate(&mut self.slots[slot].obj) {
                // release swaps the last active slot into `position`
                self.release(position);
                despawned += 1;
            } else {
                position += 1;
            }
        }
        despawned
    }

    /// Applies the despawn requests queued through [`Despawner`]s.
    ///
    /// Requests naming an object that is no longer on loan are counted as
    /// rejected instead of failing the flush, since the same object is often
    /// reported twice in one frame. Requests queued while the flush runs are
    /// left for the next one.
    pub fn flush_despawns(&mut self) -> FlushStats {
        let mut stats = FlushStats::default();
        for _ in 0..self.despawner.pending() {
            let Some(handle) = self.despawner.pop() else {
                break;
            };
            match self.loan_position(handle) {
                Some(position) => {
                    self.release(position);
                    stats.despawned += 1;
                }
                None => {
                    debug!("ignoring deferred despawn of {}: not on loan", handle);
                    stats.rejected += 1;
                }
            }
        }
        stats
    }

    fn release(&mut self, position: usize) {
        let slot = self.active.swap_remove(position);
        if let Some(&moved) = self.active.get(position) {
            self.slots[moved].state = SlotState::Active { position };
        }
        let entry = &mut self.slots[slot];
        self.sink.set_active(&mut entry.obj, false);
        entry.state = SlotState::Available;
        self.available.push(slot);
    }
}

impl<T, F: Factory<T>, S: SceneSink<T>> ObjectPool<T, F, S> {
    /// Creates a new pool holding `capacity_hint` warm objects, with
    /// unbounded growth.
    ///
    /// Each warm-up object is attached to the scene and immediately
    /// deactivated. A `capacity_hint` of zero gives a fully lazy pool.
    pub fn new(factory: F, sink: S, capacity_hint: usize) -> Result<Self, PoolError> {
        let config = PoolConfig::default().with_capacity_hint(capacity_hint);
        Self::with_config(factory, sink, config)
    }

    /// Creates a new pool from an explicit [`PoolConfig`].
    ///
    /// Fails with [`PoolError::InvalidConfig`] if a capped growth limit is
    /// below the warm-up size, and with [`PoolError::Construction`] if the
    /// factory fails during warm-up.
    pub fn with_config(mut factory: F, mut sink: S, config: PoolConfig) -> Result<Self, PoolError> {
        let requested = config.capacity_hint;
        if let GrowthPolicy::Capped { limit } = config.growth {
            if limit < requested {
                return Err(PoolError::InvalidConfig {
                    capacity_hint: requested,
                    limit,
                });
            }
        }

        let mut slots = Vec::with_capacity(requested);
        let mut available = Vec::with_capacity(requested);
        for created in 0..requested {
            let mut obj = factory
                .create()
                .map_err(|source| PoolError::Construction {
                    requested,
                    created,
                    source,
                })?;
            sink.attach(&mut obj);
            sink.set_active(&mut obj, false);
            slots.push(Slot {
                obj,
                state: SlotState::Available,
            });
            available.push(created);
        }
        debug!("object pool warmed up with {} objects", requested);

        Ok(ObjectPool {
            id: PoolId::next(),
            factory,
            sink,
            slots,
            available,
            active: Vec::with_capacity(requested),
            config,
            grown: false,
            despawner: Despawner::new(),
        })
    }

    /// Spawns an object.
    ///
    /// Reuses the most recently despawned object if there is one; otherwise
    /// grows the pool according to its [`GrowthPolicy`].
    pub fn spawn(&mut self) -> Result<PoolHandle, PoolError> {
        self.spawn_with(|_| {})
    }

    /// Spawns an object, running `init` on it before it is activated.
    ///
    /// `init` is where placement data (position, velocity, tint) is written,
    /// so the object never shows up in the scene with stale state. On error
    /// `init` is not called and the pool is unchanged.
    pub fn spawn_with(&mut self, init: impl FnOnce(&mut T)) -> Result<PoolHandle, PoolError> {
        let slot = match self.available.pop() {
            Some(slot) => slot,
            None => self.grow()?,
        };
        Ok(self.activate(slot, init))
    }

    /// Attempts to spawn an object without growing the pool.
    ///
    /// If no idle object is left, None is returned and the factory is not
    /// called.
    pub fn try_spawn(&mut self) -> Option<PoolHandle> {
        self.try_spawn_with(|_| {})
    }

    /// Like [`Self::try_spawn`], running `init` on the object before it is
    /// activated.
    pub fn try_spawn_with(&mut self, init: impl FnOnce(&mut T)) -> Option<PoolHandle> {
        let slot = self.available.pop()?;
        Some(self.activate(slot, init))
    }

    fn activate(&mut self, slot: usize, init: impl FnOnce(&mut T)) -> PoolHandle {
        let entry = &mut self.slots[slot];
        init(&mut entry.obj);
        self.sink.set_active(&mut entry.obj, true);
        entry.state = SlotState::Active {
            position: self.active.len(),
        };
        self.active.push(slot);
        let handle = PoolHandle::new(self.id, slot);
        trace!("spawned {}", handle);
        handle
    }

    /// Creates and attaches one object, returning its slot. The slot is in
    /// neither `available` nor `active` until the caller activates it.
    fn grow(&mut self) -> Result<usize, PoolError> {
        let total = self.slots.len();
        if !self.config.growth.allows(total) {
            // a capped pool refuses exactly when it holds `limit` objects
            return Err(PoolError::Exhausted { limit: total });
        }
        let mut obj = self
            .factory
            .create()
            .map_err(|source| PoolError::Growth { total, source })?;
        if self.grown {
            debug!("object pool grew to {} objects", total + 1);
        } else {
            warn!(
                "object pool exhausted its {} warm-up objects, growing; consider a larger capacity hint",
                self.config.capacity_hint
            );
            self.grown = true;
        }
        self.sink.attach(&mut obj);
        self.slots.push(Slot {
            obj,
            state: SlotState::Available,
        });
        Ok(total)
    }
}

impl<T, F, S> fmt::Debug for ObjectPool<T, F, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectPool")
            .field("id", &self.id)
            .field("total", &self.slots.len())
            .field("available", &self.available.len())
            .field("active", &self.active.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
