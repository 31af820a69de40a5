//! Pool manager for creature locations and movement.
//!
//! The `PoolManager` tracks which pool each revealed creature sits in and
//! handles movement between pools. It guarantees:
//! - A creature is in at most one pool
//! - A capped pool never grows past its capacity
//! - Members iterate in ascending id order

use im::OrdSet;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::PoolError;
use crate::creatures::CreatureId;

/// Where a revealed creature is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pool {
    /// Revealed and clickable, waiting to be caught.
    Wild,
    /// Caught by the user.
    Caught,
}

impl Pool {
    /// The pool a click moves a creature to.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Pool::Wild => Pool::Caught,
            Pool::Caught => Pool::Wild,
        }
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Pool::Wild => f.write_str("wild"),
            Pool::Caught => f.write_str("caught"),
        }
    }
}

/// Manages creature locations across pools.
///
/// ## Usage
///
/// ```
/// use wildcatch::creatures::CreatureId;
/// use wildcatch::pools::{Pool, PoolManager};
///
/// let mut pools = PoolManager::new().with_capacity(Pool::Caught, 6);
///
/// pools.place(CreatureId::new(25), Pool::Wild).unwrap();
/// pools.move_to(CreatureId::new(25), Pool::Caught).unwrap();
///
/// assert!(pools.is_in(CreatureId::new(25), Pool::Caught));
/// assert_eq!(pools.len(Pool::Wild), 0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PoolManager {
    /// Creature locations: creature_id -> pool
    locations: FxHashMap<CreatureId, Pool>,

    /// Pool members, kept sorted for rendering.
    members: FxHashMap<Pool, OrdSet<CreatureId>>,

    /// Pools with a size limit.
    capacities: FxHashMap<Pool, usize>,
}

impl PoolManager {
    /// Create a new manager with empty, uncapped pools.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap a pool at `capacity` members.
    #[must_use]
    pub fn with_capacity(mut self, pool: Pool, capacity: usize) -> Self {
        self.capacities.insert(pool, capacity);
        self
    }

    /// Capacity of a pool, `None` if uncapped.
    #[must_use]
    pub fn capacity(&self, pool: Pool) -> Option<usize> {
        self.capacities.get(&pool).copied()
    }

    /// Check if a capped pool has no room left.
    #[must_use]
    pub fn is_full(&self, pool: Pool) -> bool {
        self.capacity(pool).is_some_and(|cap| self.len(pool) >= cap)
    }

    fn ensure_room(&self, pool: Pool) -> Result<(), PoolError> {
        match self.capacity(pool) {
            Some(capacity) if self.len(pool) >= capacity => Err(PoolError::Full { pool, capacity }),
            _ => Ok(()),
        }
    }

    /// Put a creature that is not in any pool into `pool`.
    pub fn place(&mut self, id: CreatureId, pool: Pool) -> Result<(), PoolError> {
        if let Some(&current) = self.locations.get(&id) {
            return Err(PoolError::AlreadyPlaced { id, pool: current });
        }
        self.ensure_room(pool)?;

        self.locations.insert(id, pool);
        self.members.entry(pool).or_default().insert(id);
        Ok(())
    }

    /// Move a creature to another pool.
    ///
    /// Returns the pool it left. Moving to the pool it is already in is a no-op.
    pub fn move_to(&mut self, id: CreatureId, pool: Pool) -> Result<Pool, PoolError> {
        let old = self
            .locations
            .get(&id)
            .copied()
            .ok_or(PoolError::NotInPool { id, pool: pool.other() })?;

        if old == pool {
            return Ok(old);
        }
        self.ensure_room(pool)?;

        if let Some(members) = self.members.get_mut(&old) {
            members.remove(&id);
        }
        self.locations.insert(id, pool);
        self.members.entry(pool).or_default().insert(id);

        Ok(old)
    }

    /// Move a creature from `from` to the other pool.
    ///
    /// Fails with `NotInPool` unless the creature currently sits in `from`.
    pub fn transfer(&mut self, id: CreatureId, from: Pool) -> Result<(), PoolError> {
        if !self.is_in(id, from) {
            return Err(PoolError::NotInPool { id, pool: from });
        }
        self.move_to(id, from.other()).map(|_| ())
    }

    /// Check if a creature is in a specific pool.
    #[must_use]
    pub fn is_in(&self, id: CreatureId, pool: Pool) -> bool {
        self.locations.get(&id) == Some(&pool)
    }

    /// Members of a pool in ascending id order.
    ///
    /// The set is persistent, so cloning it is cheap.
    #[must_use]
    pub fn members(&self, pool: Pool) -> OrdSet<CreatureId> {
        self.members.get(&pool).cloned().unwrap_or_default()
    }

    /// Number of creatures in a pool.
    #[must_use]
    pub fn len(&self, pool: Pool) -> usize {
        self.members.get(&pool).map_or(0, OrdSet::len)
    }

    /// Check if the manager tracks a creature.
    #[must_use]
    pub fn contains(&self, id: CreatureId) -> bool {
        self.locations.contains_key(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(set: &OrdSet<CreatureId>) -> Vec<u32> {
        set.iter().map(|id| id.raw()).collect()
    }

    #[test]
    fn test_place_and_get() {
        let mut pools = PoolManager::new();

        pools.place(CreatureId::new(10), Pool::Wild).unwrap();
        pools.place(CreatureId::new(11), Pool::Caught).unwrap();

        assert!(pools.is_in(CreatureId::new(10), Pool::Wild));
        assert!(pools.is_in(CreatureId::new(11), Pool::Caught));
        assert!(!pools.contains(CreatureId::new(99)));
    }

    #[test]
    fn test_members_are_sorted() {
        let mut pools = PoolManager::new();
        for id in [30, 2, 151, 17] {
            pools.place(CreatureId::new(id), Pool::Wild).unwrap();
        }

        assert_eq!(ids(&pools.members(Pool::Wild)), vec![2, 17, 30, 151]);
        assert!(pools.members(Pool::Caught).is_empty());
    }

    #[test]
    fn test_move_between_pools() {
        let mut pools = PoolManager::new();
        pools.place(CreatureId::new(10), Pool::Wild).unwrap();

        let old = pools.move_to(CreatureId::new(10), Pool::Caught).unwrap();

        assert_eq!(old, Pool::Wild);
        assert!(pools.is_in(CreatureId::new(10), Pool::Caught));
        assert_eq!(pools.len(Pool::Wild), 0);
        assert_eq!(pools.len(Pool::Caught), 1);
    }

    #[test]
    fn test_move_to_same_pool_is_noop() {
        let mut pools = PoolManager::new();
        pools.place(CreatureId::new(3), Pool::Wild).unwrap();

        assert_eq!(pools.move_to(CreatureId::new(3), Pool::Wild), Ok(Pool::Wild));
        assert_eq!(pools.len(Pool::Wild), 1);
    }

    #[test]
    fn test_capacity_blocks_moves() {
        let mut pools = PoolManager::new().with_capacity(Pool::Caught, 2);
        for id in 1..=3 {
            pools.place(CreatureId::new(id), Pool::Wild).unwrap();
        }

        pools.move_to(CreatureId::new(1), Pool::Caught).unwrap();
        pools.move_to(CreatureId::new(2), Pool::Caught).unwrap();
        let err = pools.move_to(CreatureId::new(3), Pool::Caught).unwrap_err();

        assert_eq!(err, PoolError::Full { pool: Pool::Caught, capacity: 2 });
        assert!(pools.is_full(Pool::Caught));
        assert!(pools.is_in(CreatureId::new(3), Pool::Wild));
    }

    #[test]
    fn test_capacity_blocks_place() {
        let mut pools = PoolManager::new().with_capacity(Pool::Caught, 0);
        assert!(pools.place(CreatureId::new(1), Pool::Caught).is_err());
        assert!(!pools.contains(CreatureId::new(1)));
    }

    #[test]
    fn test_double_place_is_rejected() {
        let mut pools = PoolManager::new();
        pools.place(CreatureId::new(5), Pool::Caught).unwrap();

        let err = pools.place(CreatureId::new(5), Pool::Wild).unwrap_err();

        assert_eq!(err, PoolError::AlreadyPlaced { id: CreatureId::new(5), pool: Pool::Caught });
        assert!(pools.is_in(CreatureId::new(5), Pool::Caught));
        assert_eq!(pools.len(Pool::Wild), 0);
    }

    #[test]
    fn test_transfer_checks_source_pool() {
        let mut pools = PoolManager::new();
        pools.place(CreatureId::new(8), Pool::Caught).unwrap();

        let err = pools.transfer(CreatureId::new(8), Pool::Wild).unwrap_err();
        assert_eq!(err, PoolError::NotInPool { id: CreatureId::new(8), pool: Pool::Wild });

        pools.transfer(CreatureId::new(8), Pool::Caught).unwrap();
        assert!(pools.is_in(CreatureId::new(8), Pool::Wild));
    }

    #[test]
    fn test_pool_other() {
        assert_eq!(Pool::Wild.other(), Pool::Caught);
        assert_eq!(Pool::Caught.other(), Pool::Wild);
        assert_eq!(Pool::Wild.to_string(), "wild");
    }
}
