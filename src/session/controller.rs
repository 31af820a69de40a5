//! Reveal and catch rules.
//!
//! The `Controller` owns all session state and is driven from a single
//! event loop, so none of it needs locking:
//! - `reveal_tick` on every timer period
//! - `insert_record` / `finish_loading` as the loader delivers
//! - `catch` / `release` on user clicks
//!
//! ## Invariants
//!
//! - A creature is wild, caught, or neither; never both
//! - The caught pool never exceeds its capacity
//! - Only loaded creatures enter a pool

use rustc_hash::FxHashSet;

use super::snapshot::Snapshot;
use crate::core::{CatalogueConfig, CatalogueError, PoolError, RevealRng};
use crate::creatures::{CreatureId, CreatureRecord, Directory};
use crate::pools::{Pool, PoolManager};

/// Result of one reveal timer period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// This creature joined the wild pool.
    Revealed(CreatureId),
    /// Nothing is available yet (still loading, or everything is in a pool).
    Idle,
    /// Every creature has been revealed; the timer should stop.
    Finished,
}

/// Session state and the rules that change it.
#[derive(Clone, Debug)]
pub struct Controller {
    config: CatalogueConfig,
    directory: Directory,
    pools: PoolManager,
    /// Ids revealed at least once.
    ever_revealed: FxHashSet<CreatureId>,
    /// Ids caught at least once.
    ever_caught: FxHashSet<CreatureId>,
    rng: RevealRng,
    loading_finished: bool,
    celebrating: bool,
}

impl Controller {
    /// Create a controller with an empty directory.
    #[must_use]
    pub fn new(config: CatalogueConfig) -> Self {
        let pools = PoolManager::new().with_capacity(Pool::Caught, config.caught_capacity);
        let rng = RevealRng::from_seed(config.seed);
        tracing::info!(seed = rng.seed(), "reveal order seeded");
        Self {
            config,
            directory: Directory::new(),
            pools,
            ever_revealed: FxHashSet::default(),
            ever_caught: FxHashSet::default(),
            rng,
            loading_finished: false,
            celebrating: false,
        }
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogueConfig {
        &self.config
    }

    /// Loaded creatures.
    #[must_use]
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Pool membership.
    #[must_use]
    pub fn pools(&self) -> &PoolManager {
        &self.pools
    }

    /// Add a loaded creature.
    pub fn insert_record(&mut self, record: CreatureRecord) -> Result<(), CatalogueError> {
        self.directory.insert(record)
    }

    /// Mark that the loader will deliver nothing more.
    pub fn finish_loading(&mut self) {
        self.loading_finished = true;
    }

    /// Check if the loader is done.
    #[must_use]
    pub fn loading_finished(&self) -> bool {
        self.loading_finished
    }

    /// Loaded ids that are neither wild nor caught, ascending.
    #[must_use]
    pub fn available(&self) -> Vec<CreatureId> {
        self.directory
            .ids()
            .into_iter()
            .filter(|&id| !self.pools.contains(id))
            .collect()
    }

    /// Check if every creature has been revealed at least once.
    ///
    /// True once the whole catalogue was revealed, or once loading ended and
    /// every creature that did load was revealed.
    #[must_use]
    pub fn reveal_finished(&self) -> bool {
        let catalogue_size = usize::try_from(self.config.catalogue_size).unwrap_or(usize::MAX);
        if self.ever_revealed.len() >= catalogue_size {
            return true;
        }
        self.loading_finished
            && self
                .directory
                .iter()
                .all(|record| self.ever_revealed.contains(&record.id))
    }

    /// Reveal one random available creature.
    pub fn reveal_tick(&mut self) -> RevealOutcome {
        if self.reveal_finished() {
            return RevealOutcome::Finished;
        }

        let candidates = self.available();
        let Some(&id) = self.rng.choose(&candidates) else {
            return RevealOutcome::Idle;
        };

        if let Err(err) = self.pools.place(id, Pool::Wild) {
            tracing::warn!(%id, error = %err, "reveal rejected");
            return RevealOutcome::Idle;
        }
        self.ever_revealed.insert(id);
        tracing::debug!(%id, wild = self.pools.len(Pool::Wild), "revealed");

        if self.reveal_finished() {
            tracing::info!(revealed = self.ever_revealed.len(), "every creature revealed");
        }
        RevealOutcome::Revealed(id)
    }

    fn ensure_known(&self, id: CreatureId) -> Result<(), PoolError> {
        if self.directory.contains(id) {
            Ok(())
        } else {
            Err(PoolError::Unknown(id))
        }
    }

    /// Click on a wild creature: move it to the caught pool.
    ///
    /// Refused with `PoolError::Full` while the caught pool is at capacity.
    pub fn catch(&mut self, id: CreatureId) -> Result<(), PoolError> {
        self.ensure_known(id)?;
        self.pools.transfer(id, Pool::Wild)?;
        self.ever_caught.insert(id);
        tracing::debug!(%id, caught = self.pools.len(Pool::Caught), "caught");

        let catalogue_size = usize::try_from(self.config.catalogue_size).unwrap_or(usize::MAX);
        if !self.celebrating && self.ever_caught.len() >= catalogue_size {
            self.celebrating = true;
            tracing::info!("every creature has been caught at least once");
        }
        Ok(())
    }

    /// Click on a caught creature: send it back to the wild pool.
    pub fn release(&mut self, id: CreatureId) -> Result<(), PoolError> {
        self.ensure_known(id)?;
        self.pools.transfer(id, Pool::Caught)?;
        tracing::debug!(%id, "released");
        Ok(())
    }

    fn records(&self, pool: Pool) -> Vec<&CreatureRecord> {
        self.pools
            .members(pool)
            .iter()
            .filter_map(|&id| self.directory.get(id))
            .collect()
    }

    /// Wild creatures in ascending id order.
    #[must_use]
    pub fn wild(&self) -> Vec<&CreatureRecord> {
        self.records(Pool::Wild)
    }

    /// Caught creatures in ascending id order.
    #[must_use]
    pub fn caught(&self) -> Vec<&CreatureRecord> {
        self.records(Pool::Caught)
    }

    /// Number of distinct creatures ever caught.
    #[must_use]
    pub fn ever_caught(&self) -> usize {
        self.ever_caught.len()
    }

    /// Check if the one-time celebration has been earned.
    #[must_use]
    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    /// Immutable view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            wild: self.wild().into_iter().cloned().collect(),
            caught: self.caught().into_iter().cloned().collect(),
            caught_capacity: self.config.caught_capacity,
            catalogue_size: self.config.catalogue_size,
            loaded: self.directory.len(),
            ever_caught: self.ever_caught.len(),
            celebrating: self.celebrating,
            revealing: !self.reveal_finished(),
            loading: !self.loading_finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32) -> CreatureRecord {
        CreatureRecord::new(
            CreatureId::new(id),
            format!("creature-{id}"),
            "normal",
            format!("http://img/{id}.png"),
        )
    }

    fn loaded(size: u32) -> Controller {
        let config = CatalogueConfig::new()
            .with_catalogue_size(size)
            .with_seed(42);
        let mut controller = Controller::new(config);
        for id in 1..=size {
            controller.insert_record(record(id)).unwrap();
        }
        controller.finish_loading();
        controller
    }

    fn reveal_all(controller: &mut Controller) {
        while let RevealOutcome::Revealed(_) = controller.reveal_tick() {}
    }

    #[test]
    fn test_idle_before_anything_loads() {
        let mut controller = Controller::new(CatalogueConfig::new().with_seed(1));
        assert_eq!(controller.reveal_tick(), RevealOutcome::Idle);
        assert!(controller.snapshot().wild.is_empty());
    }

    #[test]
    fn test_reveal_moves_available_to_wild() {
        let mut controller = loaded(3);

        let RevealOutcome::Revealed(id) = controller.reveal_tick() else {
            panic!("expected a reveal");
        };

        assert!(controller.pools().is_in(id, Pool::Wild));
        assert_eq!(controller.available().len(), 2);
    }

    #[test]
    fn test_reveal_finishes_after_whole_catalogue() {
        let mut controller = loaded(4);

        for _ in 0..4 {
            assert!(matches!(controller.reveal_tick(), RevealOutcome::Revealed(_)));
        }

        assert!(controller.reveal_finished());
        assert_eq!(controller.reveal_tick(), RevealOutcome::Finished);
        assert_eq!(controller.wild().len(), 4);
    }

    #[test]
    fn test_reveal_finishes_when_loader_dropped_ids() {
        let config = CatalogueConfig::new()
            .with_catalogue_size(5)
            .with_seed(3);
        let mut controller = Controller::new(config);
        controller.insert_record(record(1)).unwrap();
        controller.insert_record(record(2)).unwrap();

        reveal_all(&mut controller);
        // Still loading: ids 3..=5 may arrive later.
        assert!(!controller.reveal_finished());
        assert_eq!(controller.reveal_tick(), RevealOutcome::Idle);

        controller.finish_loading();
        assert_eq!(controller.reveal_tick(), RevealOutcome::Finished);
    }

    #[test]
    fn test_same_seed_same_order() {
        let order = |seed| {
            let config = CatalogueConfig::new()
                .with_catalogue_size(20)
                .with_seed(seed);
            let mut controller = Controller::new(config);
            for id in (1..=20).rev() {
                controller.insert_record(record(id)).unwrap();
            }
            (0..20)
                .map(|_| match controller.reveal_tick() {
                    RevealOutcome::Revealed(id) => id.raw(),
                    other => panic!("unexpected {other:?}"),
                })
                .collect::<Vec<_>>()
        };

        assert_eq!(order(11), order(11));
    }

    #[test]
    fn test_catch_and_release() {
        let mut controller = loaded(3);
        reveal_all(&mut controller);
        let id = CreatureId::new(2);

        controller.catch(id).unwrap();
        assert!(controller.pools().is_in(id, Pool::Caught));
        assert_eq!(controller.caught()[0].id, id);

        controller.release(id).unwrap();
        assert!(controller.pools().is_in(id, Pool::Wild));
        assert!(controller.caught().is_empty());
        assert_eq!(controller.ever_caught(), 1);
    }

    #[test]
    fn test_catch_capped_at_six() {
        let mut controller = loaded(10);
        reveal_all(&mut controller);

        for id in 1..=6 {
            controller.catch(CreatureId::new(id)).unwrap();
        }
        let err = controller.catch(CreatureId::new(7)).unwrap_err();

        assert_eq!(err, PoolError::Full { pool: Pool::Caught, capacity: 6 });
        assert_eq!(controller.caught().len(), 6);
        assert!(controller.pools().is_in(CreatureId::new(7), Pool::Wild));
    }

    #[test]
    fn test_clicks_on_wrong_pool_are_rejected() {
        let mut controller = loaded(2);
        reveal_all(&mut controller);

        assert!(controller.release(CreatureId::new(1)).is_err());
        controller.catch(CreatureId::new(1)).unwrap();
        assert!(controller.catch(CreatureId::new(1)).is_err());
        assert_eq!(
            controller.catch(CreatureId::new(99)),
            Err(PoolError::Unknown(CreatureId::new(99)))
        );
    }

    #[test]
    fn test_unrevealed_creature_cannot_be_caught() {
        let mut controller = loaded(2);

        let err = controller.catch(CreatureId::new(1)).unwrap_err();

        assert_eq!(err, PoolError::NotInPool { id: CreatureId::new(1), pool: Pool::Wild });
    }

    #[test]
    fn test_released_creature_is_not_revealed_again() {
        let mut controller = loaded(2);
        reveal_all(&mut controller);
        controller.catch(CreatureId::new(1)).unwrap();
        controller.release(CreatureId::new(1)).unwrap();

        assert!(controller.available().is_empty());
        assert_eq!(controller.reveal_tick(), RevealOutcome::Finished);
    }

    #[test]
    fn test_celebration_after_catching_everything() {
        let config = CatalogueConfig::new()
            .with_catalogue_size(8)
            .with_caught_capacity(6)
            .with_seed(5);
        let mut controller = Controller::new(config);
        for id in 1..=8 {
            controller.insert_record(record(id)).unwrap();
        }
        reveal_all(&mut controller);

        for id in 1..=6 {
            controller.catch(CreatureId::new(id)).unwrap();
        }
        assert!(!controller.is_celebrating());

        controller.release(CreatureId::new(1)).unwrap();
        controller.release(CreatureId::new(2)).unwrap();
        controller.catch(CreatureId::new(7)).unwrap();
        controller.catch(CreatureId::new(8)).unwrap();

        assert!(controller.is_celebrating());
        assert!(controller.snapshot().celebrating);

        // Latched: releasing everything keeps the banner.
        controller.release(CreatureId::new(8)).unwrap();
        assert!(controller.is_celebrating());
    }

    #[test]
    fn test_duplicate_record_is_ignored() {
        let mut controller = loaded(1);
        assert!(controller.insert_record(record(1)).is_err());
        assert_eq!(controller.directory().len(), 1);
    }

    #[test]
    fn test_snapshot_lists_are_sorted() {
        let mut controller = loaded(12);
        reveal_all(&mut controller);
        for id in [9, 3, 11] {
            controller.catch(CreatureId::new(id)).unwrap();
        }

        let snapshot = controller.snapshot();
        let caught: Vec<u32> = snapshot.caught.iter().map(|r| r.id.raw()).collect();
        let wild: Vec<u32> = snapshot.wild.iter().map(|r| r.id.raw()).collect();

        assert_eq!(caught, vec![3, 9, 11]);
        assert!(wild.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(snapshot.loaded, 12);
        assert!(!snapshot.revealing);
        assert!(!snapshot.loading);
    }
}
