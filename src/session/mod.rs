//! Catch sessions: reveal timer, click handling and the event loop.
//!
//! ## Key Types
//!
//! - `Controller`: Pool rules, reveal order, celebration latch
//! - `Snapshot`: Render-ready view of both pools
//! - `Session` / `SessionHandle`: Spawned event loop and its remote control
//! - `Command`: Catch, release or shut down

pub mod controller;
pub mod runtime;
pub mod snapshot;

pub use controller::{Controller, RevealOutcome};
pub use runtime::{Command, Session, SessionHandle};
pub use snapshot::Snapshot;
