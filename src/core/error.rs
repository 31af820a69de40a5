//! Error types shared by the loader, the directory and the pools.

use thiserror::Error;

use crate::creatures::CreatureId;
use crate::pools::Pool;

/// Failure to turn a remote creature into a directory entry.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// The request never produced a response.
    #[error("request for {id} failed: {source}")]
    Http {
        id: CreatureId,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("request for {id} returned status {status}")]
    Status { id: CreatureId, status: u16 },

    /// The body was not the expected JSON shape.
    #[error("could not decode {id}: {reason}")]
    Decode { id: CreatureId, reason: String },

    /// The payload decoded but lacks a field a record needs.
    #[error("{id} is missing `{field}`")]
    MissingField { id: CreatureId, field: &'static str },

    /// The directory already holds this id.
    #[error("{0} is already in the directory")]
    Duplicate(CreatureId),
}

impl CatalogueError {
    /// Whether the loader should fetch the creature again.
    ///
    /// Only incomplete payloads are retried; transport and decode errors drop the id.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, CatalogueError::MissingField { .. })
    }
}

/// Rejected movement between pools.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    /// The target pool is at capacity.
    #[error("{pool} pool is full ({capacity})")]
    Full { pool: Pool, capacity: usize },

    /// The creature is not in the pool the move starts from.
    #[error("{id} is not in the {pool} pool")]
    NotInPool { id: CreatureId, pool: Pool },

    /// The creature has not been loaded.
    #[error("{0} is not in the directory")]
    Unknown(CreatureId),

    /// The creature is already in a pool.
    #[error("{id} is already in the {pool} pool")]
    AlreadyPlaced { id: CreatureId, pool: Pool },
}
