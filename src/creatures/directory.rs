//! Directory of loaded creatures.
//!
//! The `Directory` is append-only: records are inserted as the loader
//! delivers them and are never replaced or removed.

use rustc_hash::FxHashMap;

use super::record::{CreatureId, CreatureRecord};
use crate::core::CatalogueError;

/// Loaded creature records keyed by id.
///
/// ## Example
///
/// ```
/// use wildcatch::creatures::{CreatureId, CreatureRecord, Directory};
///
/// let mut directory = Directory::new();
/// directory
///     .insert(CreatureRecord::new(CreatureId::new(4), "charmander", "fire", "http://img/4.png"))
///     .unwrap();
///
/// assert_eq!(directory.get(CreatureId::new(4)).unwrap().category, "fire");
/// let again = CreatureRecord::new(CreatureId::new(4), "again", "fire", "x");
/// assert!(directory.insert(again).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Directory {
    records: FxHashMap<CreatureId, CreatureRecord>,
}

impl Directory {
    /// Create a new empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record.
    ///
    /// Fails with `Duplicate` if the id is already present; the stored record is kept.
    pub fn insert(&mut self, record: CreatureRecord) -> Result<(), CatalogueError> {
        if self.records.contains_key(&record.id) {
            return Err(CatalogueError::Duplicate(record.id));
        }
        self.records.insert(record.id, record);
        Ok(())
    }

    /// Get a record by id.
    #[must_use]
    pub fn get(&self, id: CreatureId) -> Option<&CreatureRecord> {
        self.records.get(&id)
    }

    /// Check if an id has been loaded.
    #[must_use]
    pub fn contains(&self, id: CreatureId) -> bool {
        self.records.contains_key(&id)
    }

    /// Number of loaded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if nothing has been loaded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Loaded ids in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<CreatureId> {
        let mut ids: Vec<_> = self.records.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Iterate over all records (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &CreatureRecord> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, name: &str, category: &str) -> CreatureRecord {
        CreatureRecord::new(CreatureId::new(id), name, category, format!("http://img/{id}.png"))
    }

    #[test]
    fn test_insert_and_get() {
        let mut directory = Directory::new();
        directory.insert(record(1, "bulbasaur", "grass")).unwrap();

        let found = directory.get(CreatureId::new(1));
        assert_eq!(found.unwrap().name, "bulbasaur");
        assert!(directory.get(CreatureId::new(99)).is_none());
    }

    #[test]
    fn test_duplicate_id_is_rejected() {
        let mut directory = Directory::new();
        directory.insert(record(1, "bulbasaur", "grass")).unwrap();

        let err = directory.insert(record(1, "impostor", "normal")).unwrap_err();

        assert!(matches!(err, CatalogueError::Duplicate(id) if id == CreatureId::new(1)));
        assert_eq!(directory.len(), 1);
        assert_eq!(directory.get(CreatureId::new(1)).unwrap().name, "bulbasaur");
    }

    #[test]
    fn test_ids_are_sorted() {
        let mut directory = Directory::new();
        for id in [42, 7, 151, 1] {
            directory.insert(record(id, "x", "normal")).unwrap();
        }

        let ids: Vec<u32> = directory.ids().into_iter().map(CreatureId::raw).collect();
        assert_eq!(ids, vec![1, 7, 42, 151]);
    }

    #[test]
    fn test_empty() {
        let directory = Directory::new();
        assert!(directory.is_empty());
        assert!(!directory.contains(CreatureId::new(1)));
    }
}
