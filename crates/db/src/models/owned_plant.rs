//! Owned plant entity model and DTOs.

use plauntie_core::reminder::CareCadence;
use plauntie_core::types::{EntityId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `owned_plants` table.
///
/// `plant_name` and `scientific_name` are a snapshot of the catalog entry
/// taken when the plant was added.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct OwnedPlant {
    pub id: EntityId,
    pub user_id: UserId,
    pub plant_id: String,
    pub nickname: String,
    pub plant_name: String,
    pub scientific_name: String,
    pub date_added: Timestamp,
    pub last_watered: Option<Timestamp>,
    pub last_fertilized: Option<Timestamp>,
    pub last_repotted: Option<Timestamp>,
    pub watering_frequency_days: i32,
    pub fertilizing_frequency_days: i32,
    pub notes: Option<String>,
    pub image_url: Option<String>,
}

impl OwnedPlant {
    /// The plant's current care cadence.
    pub fn cadence(&self) -> CareCadence {
        CareCadence {
            watering_days: self.watering_frequency_days,
            fertilizing_days: self.fertilizing_frequency_days,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for adding a plant to a user's collection.
///
/// Catalog-derived fields (`plant_id`, `plant_name`, `scientific_name`) are
/// stored as given; they are never re-checked against the catalog.
/// Cadence bounds are checked on [`CareCadence`], not here.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOwnedPlant {
    #[validate(length(min = 1, max = 128))]
    pub plant_id: String,
    #[validate(length(min = 1, max = 200))]
    pub nickname: String,
    #[validate(length(min = 1, max = 200))]
    pub plant_name: String,
    #[serde(default)]
    #[validate(length(max = 200))]
    pub scientific_name: String,
    pub watering_frequency_days: Option<i32>,
    pub fertilizing_frequency_days: Option<i32>,
    #[validate(length(max = 5000))]
    pub notes: Option<String>,
    #[validate(length(max = 2048))]
    pub image_url: Option<String>,
}

impl CreateOwnedPlant {
    /// Cadence requested by the caller, with defaults filled in.
    pub fn cadence(&self) -> CareCadence {
        CareCadence::new(self.watering_frequency_days, self.fertilizing_frequency_days)
    }
}
