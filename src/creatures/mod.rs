//! Creature catalogue: ids, records and the directory.
//!
//! ## Key Types
//!
//! - `CreatureId`: Catalogue number, ordered numerically
//! - `CreatureRecord`: Name, category and image of one creature
//! - `Directory`: Append-only id → record map

pub mod directory;
pub mod record;

pub use directory::Directory;
pub use record::{CreatureId, CreatureRecord};
