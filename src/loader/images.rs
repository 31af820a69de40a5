//! Sprite pre-fetching.
//!
//! Every loaded creature's thumbnail is fetched once in the background so it
//! is already local when the creature is revealed. Failures are logged and
//! otherwise ignored.

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::Client;
use rustc_hash::FxHashMap;

use crate::core::CatalogueError;
use crate::creatures::CreatureRecord;

/// Warms an image cache for a record's thumbnail.
#[async_trait]
pub trait ImagePreloader: Send + Sync {
    async fn preload(&self, record: &CreatureRecord) -> Result<(), CatalogueError>;
}

/// Preloader that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPreload;

#[async_trait]
impl ImagePreloader for NoPreload {
    async fn preload(&self, _record: &CreatureRecord) -> Result<(), CatalogueError> {
        Ok(())
    }
}

/// In-memory sprite bytes keyed by url.
#[derive(Debug)]
pub struct SpriteCache {
    client: Client,
    images: Mutex<FxHashMap<String, Vec<u8>>>,
}

impl SpriteCache {
    /// Create an empty cache that downloads with `client`.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self {
            client,
            images: Mutex::new(FxHashMap::default()),
        }
    }

    /// Check if a sprite has been fetched.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.images
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(url)
    }

    /// Number of cached sprites.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store bytes for a url, keeping an earlier entry.
    pub fn insert(&self, url: impl Into<String>, bytes: Vec<u8>) {
        self.images
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(url.into())
            .or_insert(bytes);
    }
}

#[async_trait]
impl ImagePreloader for SpriteCache {
    async fn preload(&self, record: &CreatureRecord) -> Result<(), CatalogueError> {
        if self.contains(&record.image_url) {
            return Ok(());
        }

        let id = record.id;
        let response = self
            .client
            .get(&record.image_url)
            .send()
            .await
            .map_err(|source| CatalogueError::Http { id, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogueError::Status { id, status: status.as_u16() });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| CatalogueError::Http { id, source })?;

        tracing::trace!(%id, size = bytes.len(), "sprite cached");
        self.insert(record.image_url.clone(), bytes.to_vec());
        Ok(())
    }
}
