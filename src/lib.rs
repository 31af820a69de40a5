//! # wildcatch
//!
//! Reveal creatures from a remote catalogue one at a time and catch up to
//! six of them at once.
//!
//! ## How a session runs
//!
//! 1. **Loading**: ids `1..=151` are fetched from PokéAPI in two batches a
//!    minute apart, staying under the 100 requests/minute limit. Each
//!    record's sprite is pre-fetched into a cache.
//!
//! 2. **Revealing**: every 500 ms a random loaded creature that is neither
//!    wild nor caught joins the wild pool. The timer stops once everything
//!    has been revealed.
//!
//! 3. **Catching**: clicking a wild creature moves it to the caught pool
//!    (at most six); clicking a caught one sends it back. Catching every
//!    creature at least once earns a one-time celebration.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, reveal RNG
//! - `creatures`: Ids, records, the directory
//! - `pools`: Wild/caught membership with capacity
//! - `loader`: REST payloads, HTTP source, sprite cache, batched loader
//! - `session`: Controller rules, snapshots, the event loop
//! - `tui`: Terminal front end (feature `tui`)

pub mod core;
pub mod creatures;
pub mod loader;
pub mod pools;
pub mod session;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export commonly used types
pub use crate::core::{CatalogueConfig, CatalogueError, PoolError, RevealRng};

pub use crate::creatures::{CreatureId, CreatureRecord, Directory};

pub use crate::pools::{Pool, PoolManager};

pub use crate::loader::{
    ApiCreature, CatalogueLoader, CreatureSource, HttpSource, ImagePreloader, LoadReport,
    LoaderEvent, NoPreload, SpriteCache,
};

pub use crate::session::{Command, Controller, RevealOutcome, Session, SessionHandle, Snapshot};
