//! The session event loop.
//!
//! One tokio task owns the `Controller` and serialises the three things that
//! change it: reveal timer ticks, loader deliveries and user commands. After
//! every change a fresh `Snapshot` is published on a watch channel.
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use wildcatch::core::CatalogueConfig;
//! use wildcatch::loader::{HttpSource, SpriteCache};
//! use wildcatch::session::Session;
//!
//! # async fn demo() -> reqwest::Result<()> {
//! let config = CatalogueConfig::default();
//! let source = HttpSource::new(config.clone())?;
//! let sprites = SpriteCache::new(source.client().clone());
//!
//! let handle = Session::new(config, Arc::new(source), Arc::new(sprites)).spawn();
//! let snapshot = handle.snapshot();
//! if let Some(first) = snapshot.wild.first() {
//!     handle.catch(first.id);
//! }
//! let _controller = handle.shutdown().await;
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinError, JoinHandle};
use tokio::time::{Instant, MissedTickBehavior};

use super::controller::{Controller, RevealOutcome};
use super::snapshot::Snapshot;
use crate::core::CatalogueConfig;
use crate::creatures::CreatureId;
use crate::loader::{CatalogueLoader, CreatureSource, ImagePreloader, LoaderEvent};

/// User input for a running session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Click on a wild creature.
    Catch(CreatureId),
    /// Click on a caught creature.
    Release(CreatureId),
    /// Stop the timer and the loader, then end the loop.
    Shutdown,
}

/// A catch session ready to be spawned.
pub struct Session<S, P> {
    config: CatalogueConfig,
    source: Arc<S>,
    images: Arc<P>,
}

impl<S, P> Session<S, P>
where
    S: CreatureSource + 'static,
    P: ImagePreloader + 'static,
{
    /// Create a session over a creature source and a sprite preloader.
    pub fn new(config: CatalogueConfig, source: Arc<S>, images: Arc<P>) -> Self {
        Self { config, source, images }
    }

    /// Start the loader and the event loop on the current tokio runtime.
    pub fn spawn(self) -> SessionHandle {
        let controller = Controller::new(self.config.clone());
        let loader = CatalogueLoader::new(self.config, self.source, self.images);

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());

        let task = tokio::spawn(drive(controller, loader, command_rx, snapshot_tx));

        SessionHandle {
            commands: command_tx,
            snapshots: snapshot_rx,
            task,
        }
    }
}

/// Handle to a running session.
///
/// Dropping it ends the session as well: the loop stops once no command
/// sender is left.
pub struct SessionHandle {
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<Snapshot>,
    task: JoinHandle<Controller>,
}

impl SessionHandle {
    /// Send a command. Returns `false` if the session already ended.
    pub fn send(&self, command: Command) -> bool {
        self.commands.send(command).is_ok()
    }

    /// Click on a wild creature.
    pub fn catch(&self, id: CreatureId) -> bool {
        self.send(Command::Catch(id))
    }

    /// Click on a caught creature.
    pub fn release(&self, id: CreatureId) -> bool {
        self.send(Command::Release(id))
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.snapshots.borrow().clone()
    }

    /// Another receiver for snapshots, e.g. for a render thread.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.snapshots.clone()
    }

    /// Wait for the next snapshot. Returns `false` once the session ended.
    pub async fn changed(&mut self) -> bool {
        self.snapshots.changed().await.is_ok()
    }

    /// Stop the session and return its final state.
    pub async fn shutdown(self) -> Result<Controller, JoinError> {
        let _ = self.commands.send(Command::Shutdown);
        self.task.await
    }
}

async fn drive<S, P>(
    mut controller: Controller,
    loader: CatalogueLoader<S, P>,
    mut commands: mpsc::UnboundedReceiver<Command>,
    snapshots: watch::Sender<Snapshot>,
) -> Controller
where
    S: CreatureSource + 'static,
    P: ImagePreloader + 'static,
{
    let (loader_tx, mut loader_rx) = mpsc::unbounded_channel();
    let loader_task = tokio::spawn(loader.run(loader_tx));

    // `interval_at` panics on a zero period.
    let period = controller.config().reveal_interval.max(Duration::from_millis(1));
    let mut reveal = tokio::time::interval_at(Instant::now() + period, period);
    reveal.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut revealing = !controller.reveal_finished();

    loop {
        tokio::select! {
            _ = reveal.tick(), if revealing => {
                let outcome = controller.reveal_tick();
                if outcome == RevealOutcome::Finished || controller.reveal_finished() {
                    revealing = false;
                    tracing::info!("reveal timer stopped");
                }
            }
            Some(event) = loader_rx.recv() => match event {
                LoaderEvent::Loaded(record) => {
                    if let Err(err) = controller.insert_record(record) {
                        tracing::warn!(error = %err, "record ignored");
                    }
                }
                LoaderEvent::Finished(report) => {
                    tracing::debug!(dropped = ?report.dropped, "loader finished");
                    controller.finish_loading();
                }
            },
            command = commands.recv() => match command {
                Some(Command::Catch(id)) => {
                    if let Err(err) = controller.catch(id) {
                        tracing::debug!(error = %err, "catch ignored");
                    }
                }
                Some(Command::Release(id)) => {
                    if let Err(err) = controller.release(id) {
                        tracing::debug!(error = %err, "release ignored");
                    }
                }
                Some(Command::Shutdown) | None => break,
            },
        }
        snapshots.send_replace(controller.snapshot());
    }

    loader_task.abort();
    tracing::debug!("session ended");
    controller
}
