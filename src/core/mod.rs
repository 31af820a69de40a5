//! Core types: configuration, errors and the reveal RNG.

pub mod config;
pub mod error;
pub mod rng;

pub use config::CatalogueConfig;
pub use error::{CatalogueError, PoolError};
pub use rng::RevealRng;
