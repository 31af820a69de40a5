//! Render-ready view of a session.

use serde::{Deserialize, Serialize};

use crate::creatures::{CreatureId, CreatureRecord};

/// Both pools plus the counters a front end shows.
///
/// Lists are in ascending id order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub wild: Vec<CreatureRecord>,
    pub caught: Vec<CreatureRecord>,
    pub caught_capacity: usize,
    pub catalogue_size: u32,
    /// Records in the directory so far.
    pub loaded: usize,
    /// Distinct creatures caught at least once.
    pub ever_caught: usize,
    /// Latched once every creature has been caught.
    pub celebrating: bool,
    /// The reveal timer is still running.
    pub revealing: bool,
    /// The loader is still running.
    pub loading: bool,
}

impl Snapshot {
    /// Check if another catch would be refused.
    #[must_use]
    pub fn caught_full(&self) -> bool {
        self.caught.len() >= self.caught_capacity
    }

    /// Check if a creature is currently wild.
    #[must_use]
    pub fn is_wild(&self, id: CreatureId) -> bool {
        self.wild.iter().any(|r| r.id == id)
    }

    /// Check if a creature is currently caught.
    #[must_use]
    pub fn is_caught(&self, id: CreatureId) -> bool {
        self.caught.iter().any(|r| r.id == id)
    }
}
