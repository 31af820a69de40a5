//! Scripted creature source shared by the integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::time::Instant;

use wildcatch::core::CatalogueError;
use wildcatch::creatures::{CreatureId, CreatureRecord};
use wildcatch::loader::{ApiCreature, CreatureSource, ImagePreloader};

/// Canned answer for one fetch.
#[derive(Clone, Copy, Debug)]
pub enum Reply {
    /// Complete payload.
    Full,
    /// Payload without a front sprite.
    MissingSprite,
    /// Non-success HTTP status.
    Status(u16),
    /// Complete payload that carries another creature's id.
    Alias(u32),
}

/// In-memory `CreatureSource`. Unscripted ids answer `Reply::Full`.
#[derive(Default)]
pub struct ScriptedSource {
    script: Mutex<HashMap<u32, VecDeque<Reply>>>,
    calls: Mutex<Vec<(CreatureId, Instant)>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer fetches of `id` with `replies`, in order.
    pub fn with_replies(self, id: u32, replies: &[Reply]) -> Self {
        self.script
            .lock()
            .unwrap()
            .insert(id, replies.iter().copied().collect());
        self
    }

    /// Requested ids in call order.
    pub fn calls(&self) -> Vec<CreatureId> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| *id)
            .collect()
    }

    /// Number of requests for one id.
    pub fn calls_for(&self, id: u32) -> usize {
        self.calls().iter().filter(|c| c.raw() == id).count()
    }

    /// When each request happened.
    pub fn call_times(&self) -> Vec<(CreatureId, Instant)> {
        self.calls.lock().unwrap().clone()
    }
}

pub fn payload(id: u32, sprite: bool) -> ApiCreature {
    let sprite = if sprite {
        serde_json::Value::String(format!("http://img/{id}.png"))
    } else {
        serde_json::Value::Null
    };
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("creature-{id}"),
        "types": [{"slot": 1, "type": {"name": "normal", "url": "http://types/1"}}],
        "sprites": {"front_default": sprite}
    }))
    .unwrap()
}

#[async_trait]
impl CreatureSource for ScriptedSource {
    async fn fetch(&self, id: CreatureId) -> Result<ApiCreature, CatalogueError> {
        self.calls.lock().unwrap().push((id, Instant::now()));
        let reply = self
            .script
            .lock()
            .unwrap()
            .get_mut(&id.raw())
            .and_then(VecDeque::pop_front)
            .unwrap_or(Reply::Full);

        match reply {
            Reply::Full => Ok(payload(id.raw(), true)),
            Reply::MissingSprite => Ok(payload(id.raw(), false)),
            Reply::Status(status) => Err(CatalogueError::Status { id, status }),
            Reply::Alias(other) => Ok(payload(other, true)),
        }
    }
}

/// Preloader that records which sprites it was asked for.
#[derive(Default)]
pub struct RecordingPreloader {
    urls: Mutex<Vec<String>>,
}

impl RecordingPreloader {
    pub fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImagePreloader for RecordingPreloader {
    async fn preload(&self, record: &CreatureRecord) -> Result<(), CatalogueError> {
        self.urls.lock().unwrap().push(record.image_url.clone());
        Ok(())
    }
}
