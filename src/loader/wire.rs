//! JSON shape of a creature as served by the REST API.
//!
//! Only the fields the catalogue needs are decoded; everything else in the
//! (large) payload is ignored. Fields that may be absent are optional here so
//! an incomplete payload still decodes and can be reported as `MissingField`.

use serde::{Deserialize, Serialize};

use crate::core::CatalogueError;
use crate::creatures::{CreatureId, CreatureRecord};

/// Creature payload, e.g. `GET /api/v2/pokemon/25`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiCreature {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub types: Vec<ApiTypeSlot>,
    #[serde(default)]
    pub sprites: ApiSprites,
}

/// One entry of `types`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiTypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// `{ "name": ..., "url": ... }` reference used throughout the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ApiCreature {
    /// Decode a response body.
    pub fn from_json(requested: CreatureId, body: &[u8]) -> Result<Self, CatalogueError> {
        serde_json::from_slice(body).map_err(|e| CatalogueError::Decode {
            id: requested,
            reason: e.to_string(),
        })
    }

    /// Catalogue id carried by the payload.
    #[must_use]
    pub fn creature_id(&self) -> CreatureId {
        CreatureId::new(self.id)
    }

    /// Build a record from the first listed type and the front sprite.
    ///
    /// Empty strings count as missing.
    pub fn into_record(self) -> Result<CreatureRecord, CatalogueError> {
        let id = self.creature_id();

        let name = present(self.name).ok_or(CatalogueError::MissingField { id, field: "name" })?;
        let category = self
            .types
            .into_iter()
            .next()
            .and_then(|slot| present(slot.kind.name))
            .ok_or(CatalogueError::MissingField { id, field: "types[0].type.name" })?;
        let image_url = present(self.sprites.front_default).ok_or(CatalogueError::MissingField {
            id,
            field: "sprites.front_default",
        })?;

        Ok(CreatureRecord::new(id, name, category, image_url))
    }
}
