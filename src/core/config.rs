//! Catalogue and session configuration.
//!
//! Everything the loader and the controller need to know is fixed when a
//! session starts:
//! - Where creatures come from (`base_url`, `catalogue_size`)
//! - How fast they may be fetched (`batch_size`, `batch_delay`)
//! - How the pools behave (`reveal_interval`, `caught_capacity`)
//!
//! The defaults are sized for PokéAPI's rate limit of 100 requests per
//! minute and the first-generation catalogue.

use std::ops::RangeInclusive;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::creatures::CreatureId;

/// Default REST endpoint. The creature id is appended to it.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2/pokemon/";

/// Number of creatures in the catalogue (ids `1..=151`).
pub const DEFAULT_CATALOGUE_SIZE: u32 = 151;

/// Ids fetched per batch, kept under the 100 requests/minute ceiling.
pub const DEFAULT_BATCH_SIZE: u32 = 99;

/// Spacing between the start of consecutive batches.
pub const DEFAULT_BATCH_DELAY: Duration = Duration::from_secs(60);

/// Delay between two reveals.
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(500);

/// How many creatures may be caught at once.
pub const DEFAULT_CAUGHT_CAPACITY: usize = 6;

/// Configuration for one catch session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogueConfig {
    /// Endpoint prefix; `{base_url}{id}` is requested for each creature.
    pub base_url: String,

    /// Ids `1..=catalogue_size` make up the catalogue.
    pub catalogue_size: u32,

    /// Maximum ids fetched in one batch.
    pub batch_size: u32,

    /// Batch `k` starts no earlier than `k * batch_delay` after loading began.
    pub batch_delay: Duration,

    /// Period of the reveal timer. The first reveal happens one period in.
    pub reveal_interval: Duration,

    /// Maximum size of the caught pool.
    pub caught_capacity: usize,

    /// Extra attempts for a creature whose payload lacks name, type or sprite.
    pub missing_field_retries: u32,

    /// Per-request timeout for the HTTP client.
    pub request_timeout: Duration,

    /// Seed for the reveal order. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for CatalogueConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            catalogue_size: DEFAULT_CATALOGUE_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
            batch_delay: DEFAULT_BATCH_DELAY,
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            caught_capacity: DEFAULT_CAUGHT_CAPACITY,
            missing_field_retries: 1,
            request_timeout: Duration::from_secs(30),
            seed: None,
        }
    }
}

impl CatalogueConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different endpoint prefix.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the catalogue size.
    #[must_use]
    pub fn with_catalogue_size(mut self, size: u32) -> Self {
        self.catalogue_size = size;
        self
    }

    /// Set the batch size. Zero is treated as one.
    #[must_use]
    pub fn with_batch_size(mut self, size: u32) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Set the spacing between batch starts.
    #[must_use]
    pub fn with_batch_delay(mut self, delay: Duration) -> Self {
        self.batch_delay = delay;
        self
    }

    /// Set the reveal timer period.
    #[must_use]
    pub fn with_reveal_interval(mut self, interval: Duration) -> Self {
        self.reveal_interval = interval;
        self
    }

    /// Set the caught pool capacity.
    #[must_use]
    pub fn with_caught_capacity(mut self, capacity: usize) -> Self {
        self.caught_capacity = capacity;
        self
    }

    /// Set how many times a creature with missing fields is re-fetched.
    #[must_use]
    pub fn with_missing_field_retries(mut self, retries: u32) -> Self {
        self.missing_field_retries = retries;
        self
    }

    /// Set the HTTP request timeout.
    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Fix the reveal order with a seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Id ranges of the fetch batches, in order.
    ///
    /// Every id of `1..=catalogue_size` appears in exactly one range.
    #[must_use]
    pub fn batches(&self) -> Vec<RangeInclusive<CreatureId>> {
        let step = self.batch_size.max(1);
        let mut batches = Vec::new();
        let mut start = 1u32;
        while start <= self.catalogue_size {
            let end = start.saturating_add(step - 1).min(self.catalogue_size);
            batches.push(CreatureId::new(start)..=CreatureId::new(end));
            match end.checked_add(1) {
                Some(next) => start = next,
                None => break,
            }
        }
        batches
    }

    /// Url requested for a creature.
    #[must_use]
    pub fn creature_url(&self, id: CreatureId) -> String {
        format!("{}{}", self.base_url, id.raw())
    }
}
