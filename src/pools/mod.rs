//! Pools of revealed creatures.
//!
//! A revealed creature is either wild (clickable, waiting) or caught.
//! The caught pool is capped; the wild pool is not.
//!
//! ## Key Types
//!
//! - `Pool`: Wild or Caught
//! - `PoolManager`: Location tracking and movement with capacity checks

pub mod manager;

pub use manager::{Pool, PoolManager};
