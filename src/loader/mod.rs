//! Catalogue loading from the REST API.
//!
//! ## Key Types
//!
//! - `ApiCreature`: Decoded response payload
//! - `CreatureSource`: Fetch seam, implemented by `HttpSource`
//! - `ImagePreloader`: Sprite warm-up, implemented by `SpriteCache`
//! - `CatalogueLoader`: Rate-limited batches with retry-on-missing-field

pub mod catalogue;
pub mod images;
pub mod source;
pub mod wire;

pub use catalogue::{CatalogueLoader, LoadReport, LoaderEvent};
pub use images::{ImagePreloader, NoPreload, SpriteCache};
pub use source::{CreatureSource, HttpSource};
pub use wire::ApiCreature;
