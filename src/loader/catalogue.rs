//! Batched catalogue loading.
//!
//! Ids are fetched one after another inside a batch; batch `k` waits until
//! `k * batch_delay` has passed since loading started so the request rate
//! stays under the API ceiling.
//!
//! ## Failure handling
//!
//! - Incomplete payload: fetch the same id again, up to `missing_field_retries` times
//! - Anything else: log and drop the id
//!
//! Loaded records are sent to the session as `LoaderEvent::Loaded`; the
//! final `LoaderEvent::Finished` carries the `LoadReport`.

use std::ops::RangeInclusive;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Instant;

use super::images::ImagePreloader;
use super::source::CreatureSource;
use super::wire::ApiCreature;
use crate::core::{CatalogueConfig, CatalogueError};
use crate::creatures::{CreatureId, CreatureRecord};

/// Message from the loader task to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoaderEvent {
    /// A creature is ready for the directory.
    Loaded(CreatureRecord),
    /// All batches ran.
    Finished(LoadReport),
}

/// Outcome of a full load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Requested ids whose record was delivered, in fetch order.
    pub loaded: Vec<CreatureId>,
    /// Ids given up on, in fetch order.
    pub dropped: Vec<CreatureId>,
}

/// Fetches the catalogue through a `CreatureSource`.
pub struct CatalogueLoader<S, P> {
    config: CatalogueConfig,
    source: Arc<S>,
    images: Arc<P>,
}

impl<S, P> CatalogueLoader<S, P>
where
    S: CreatureSource + 'static,
    P: ImagePreloader + 'static,
{
    /// Create a loader.
    pub fn new(config: CatalogueConfig, source: Arc<S>, images: Arc<P>) -> Self {
        Self { config, source, images }
    }

    /// Fetch one creature, re-fetching incomplete payloads.
    pub async fn fetch_record(&self, id: CreatureId) -> Result<CreatureRecord, CatalogueError> {
        let mut retries_left = self.config.missing_field_retries;
        loop {
            let result = self
                .source
                .fetch(id)
                .await
                .and_then(ApiCreature::into_record);

            match result {
                Err(err) if err.is_retryable() && retries_left > 0 => {
                    retries_left -= 1;
                    tracing::debug!(%id, error = %err, "incomplete payload, retrying");
                }
                other => return other,
            }
        }
    }

    fn spawn_preload(&self, record: CreatureRecord) {
        let images = Arc::clone(&self.images);
        tokio::spawn(async move {
            if let Err(err) = images.preload(&record).await {
                tracing::warn!(id = %record.id, error = %err, "sprite preload failed");
            }
        });
    }

    /// Fetch every id of `batch` in order.
    ///
    /// The report tracks requested ids. A payload whose id was already
    /// delivered counts as dropped and is neither sent nor preloaded.
    /// Returns `false` once the receiving side is gone.
    async fn load_batch(
        &self,
        batch: RangeInclusive<CreatureId>,
        events: &UnboundedSender<LoaderEvent>,
        report: &mut LoadReport,
        delivered: &mut FxHashSet<CreatureId>,
    ) -> bool {
        for raw in batch.start().raw()..=batch.end().raw() {
            let id = CreatureId::new(raw);
            let record = self.fetch_record(id).await.and_then(|record| {
                if delivered.insert(record.id) {
                    Ok(record)
                } else {
                    Err(CatalogueError::Duplicate(record.id))
                }
            });

            match record {
                Ok(record) => {
                    if record.id != id {
                        tracing::debug!(
                            requested = %id,
                            received = %record.id,
                            "payload id differs"
                        );
                    }
                    report.loaded.push(id);
                    self.spawn_preload(record.clone());
                    if events.send(LoaderEvent::Loaded(record)).is_err() {
                        return false;
                    }
                }
                Err(err) => {
                    tracing::warn!(%id, error = %err, "dropping creature");
                    report.dropped.push(id);
                }
            }
        }
        true
    }

    /// Run every batch on schedule and report the result.
    ///
    /// Stops early, without a `Finished` event, if the session went away.
    pub async fn run(self, events: UnboundedSender<LoaderEvent>) -> LoadReport {
        let started = Instant::now();
        let mut report = LoadReport::default();
        let mut delivered = FxHashSet::default();

        for (index, batch) in self.config.batches().into_iter().enumerate() {
            let offset = u32::try_from(index).unwrap_or(u32::MAX);
            let starts_at = started + self.config.batch_delay.saturating_mul(offset);
            tokio::time::sleep_until(starts_at).await;

            tracing::info!(
                batch = index,
                first = %batch.start(),
                last = %batch.end(),
                "loading batch"
            );
            if !self.load_batch(batch, &events, &mut report, &mut delivered).await {
                tracing::debug!("session closed, loader stopping");
                return report;
            }
        }

        tracing::info!(
            loaded = report.loaded.len(),
            dropped = report.dropped.len(),
            "catalogue loaded"
        );
        let _ = events.send(LoaderEvent::Finished(report.clone()));
        report
    }
}
