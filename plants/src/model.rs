//! Plant catalog types as they travel between storage and the wire.
//!
//! Field names are serialized exactly as the web tier expects them, so
//! renaming a field here is a breaking wire change.

use serde::{Deserialize, Serialize};

/// Store-assigned plant identifier (`serial` column).
pub type PlantId = i32;

/// Store-assigned log entry identifier (`serial` column).
pub type LogId = i32;

/// Event type written for every log entry. No event kinds are defined yet.
pub const UNSPECIFIED_EVENT_TYPE: i32 = 0;

/// Identifier and common name of a plant, used for list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantShortDesc {
    pub id: PlantId,
    pub common_name: String,
}

/// A care-log entry attached to a plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantLog {
    pub id: LogId,
    pub plant_id: PlantId,
    pub desc: String,
    pub event_type: i32,
}

/// The three names stored for a plant. Scientific names are empty when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlantNames {
    pub common: String,
    pub generic: String,
    pub specific: String,
}

/// A plant with its names and every log entry recorded for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub common_name: String,
    pub generic_name: String,
    pub specific_name: String,
    pub logs: Vec<PlantLog>,
}

impl Plant {
    /// Assemble a plant from separately fetched names and logs.
    pub fn from_parts(id: PlantId, names: PlantNames, logs: Vec<PlantLog>) -> Self {
        Self {
            id,
            common_name: names.common,
            generic_name: names.generic,
            specific_name: names.specific,
            logs,
        }
    }
}
