//! Creature records - static catalogue data.
//!
//! A `CreatureRecord` is built once from a successful fetch and never
//! changes afterwards. Where the creature currently sits (wild or caught)
//! is tracked by the pools, not here.

use serde::{Deserialize, Serialize};

/// Catalogue number of a creature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CreatureId(pub u32);

impl CreatureId {
    /// Create a new creature ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CreatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:03}", self.0)
    }
}

/// Immutable creature data.
///
/// ## Example
///
/// ```
/// use wildcatch::creatures::{CreatureId, CreatureRecord};
///
/// let pikachu = CreatureRecord::new(
///     CreatureId::new(25),
///     "pikachu",
///     "electric",
///     "https://example.invalid/25.png",
/// );
///
/// assert_eq!(pikachu.name, "pikachu");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: CreatureId,
    pub name: String,
    /// Primary type, e.g. "grass".
    pub category: String,
    /// Front sprite used for the thumbnail.
    pub image_url: String,
}

impl CreatureRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(
        id: CreatureId,
        name: impl Into<String>,
        category: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
            image_url: image_url.into(),
        }
    }
}
