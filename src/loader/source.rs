//! Where creature payloads come from.
//!
//! `CreatureSource` is the seam between the loader and the network. The
//! production implementation is `HttpSource`; tests script their own.

use async_trait::async_trait;
use reqwest::Client;

use super::wire::ApiCreature;
use crate::core::{CatalogueConfig, CatalogueError};
use crate::creatures::CreatureId;

/// Fetches one creature payload by id.
///
/// Implementations report failures through `CatalogueError`; the loader
/// decides whether to retry or drop.
#[async_trait]
pub trait CreatureSource: Send + Sync {
    async fn fetch(&self, id: CreatureId) -> Result<ApiCreature, CatalogueError>;
}

/// `GET {base_url}{id}` against the REST API.
#[derive(Clone, Debug)]
pub struct HttpSource {
    client: Client,
    config: CatalogueConfig,
}

impl HttpSource {
    /// Build a client with the configured timeout.
    pub fn new(config: CatalogueConfig) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self { client, config })
    }

    /// Shared HTTP client, e.g. for the sprite cache.
    #[must_use]
    pub fn client(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl CreatureSource for HttpSource {
    async fn fetch(&self, id: CreatureId) -> Result<ApiCreature, CatalogueError> {
        let url = self.config.creature_url(id);
        tracing::debug!(%id, %url, "fetching creature");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| CatalogueError::Http { id, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogueError::Status { id, status: status.as_u16() });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CatalogueError::Http { id, source })?;

        ApiCreature::from_json(id, &body)
    }
}
