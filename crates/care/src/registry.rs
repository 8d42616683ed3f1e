//! Owned plant registry.
//!
//! Adding a plant also schedules its first watering and fertilizing
//! reminders; both writes share one transaction.

use plauntie_core::error::CoreError;
use plauntie_core::plant::{validate_not_blank, validate_user_id, MAX_PLANTS_PER_LIST};
use plauntie_core::reminder::ReminderKind;
use plauntie_core::types::{EntityId, Timestamp};
use plauntie_db::models::owned_plant::{CreateOwnedPlant, OwnedPlant};
use plauntie_db::repositories::OwnedPlantRepo;
use sqlx::{PgExecutor, PgPool};
use validator::Validate;

use crate::engine::ReminderEngine;
use crate::error::CareResult;

/// Stores each user's plants and their last care actions.
pub struct PlantRegistry;

impl PlantRegistry {
    /// Add a plant to a user's collection and schedule its initial reminders.
    pub async fn add_plant(
        pool: &PgPool,
        user_id: &str,
        input: &CreateOwnedPlant,
        now: Timestamp,
    ) -> CareResult<OwnedPlant> {
        validate_new_plant(user_id, input)?;

        let mut tx = pool.begin().await?;
        let plant = OwnedPlantRepo::create(&mut *tx, user_id, input, now).await?;
        let reminders = ReminderEngine::schedule_initial_reminders(&mut *tx, &plant, now).await?;
        tx.commit().await?;

        tracing::info!(
            user_id,
            plant_id = %plant.id,
            reminders = reminders.len(),
            "Plant added",
        );
        Ok(plant)
    }

    /// List all plants owned by a user, oldest first.
    pub async fn list_plants(pool: &PgPool, user_id: &str) -> CareResult<Vec<OwnedPlant>> {
        validate_user_id(user_id)?;
        let plants = OwnedPlantRepo::list_for_user(pool, user_id, MAX_PLANTS_PER_LIST).await?;
        Ok(plants)
    }

    /// Fetch one of a user's plants.
    pub async fn get_plant(
        pool: &PgPool,
        user_id: &str,
        plant_id: EntityId,
    ) -> CareResult<OwnedPlant> {
        validate_user_id(user_id)?;
        OwnedPlantRepo::find_for_user(pool, user_id, plant_id)
            .await?
            .ok_or_else(|| CoreError::not_found("OwnedPlant", plant_id).into())
    }

    /// Stamp the `last_*` field matching `kind` on a plant.
    ///
    /// A missing plant is not an error: the caller's reminder stays
    /// completed. Returns whether the plant was found.
    pub async fn record_care_action<'e, E: PgExecutor<'e>>(
        executor: E,
        plant_id: EntityId,
        kind: ReminderKind,
        at: Timestamp,
    ) -> CareResult<bool> {
        let found = OwnedPlantRepo::record_care_action(executor, plant_id, kind, at).await?;
        if !found {
            tracing::warn!(
                plant_id = %plant_id,
                kind = %kind,
                "Plant not found while recording care action, skipping",
            );
        }
        Ok(found)
    }
}

/// Validate an add-plant request before anything is written.
///
/// Field lengths come from the DTO's `Validate` derive; blank text and
/// cadence bounds are checked here.
pub fn validate_new_plant(user_id: &str, input: &CreateOwnedPlant) -> Result<(), CoreError> {
    validate_user_id(user_id)?;
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    validate_not_blank("plant_id", &input.plant_id)?;
    validate_not_blank("nickname", &input.nickname)?;
    validate_not_blank("plant_name", &input.plant_name)?;
    input.cadence().validate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CreateOwnedPlant {
        CreateOwnedPlant {
            plant_id: "42".to_string(),
            nickname: "Spike".to_string(),
            plant_name: "Snake plant".to_string(),
            scientific_name: "Dracaena trifasciata".to_string(),
            watering_frequency_days: Some(14),
            fertilizing_frequency_days: None,
            notes: None,
            image_url: None,
        }
    }

    #[test]
    fn accepts_valid_input() {
        assert!(validate_new_plant("alice", &input()).is_ok());
    }

    #[test]
    fn rejects_blank_nickname() {
        let mut bad = input();
        bad.nickname = "  ".to_string();
        assert!(matches!(
            validate_new_plant("alice", &bad),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn rejects_zero_cadence() {
        let mut bad = input();
        bad.fertilizing_frequency_days = Some(0);
        assert!(matches!(
            validate_new_plant("alice", &bad),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn rejects_year_plus_cadence() {
        let mut bad = input();
        bad.watering_frequency_days = Some(366);
        let err = validate_new_plant("alice", &bad).unwrap_err();
        assert!(err.to_string().contains("watering_frequency_days"));
    }

    #[test]
    fn rejects_overlong_nickname() {
        let mut bad = input();
        bad.nickname = "x".repeat(201);
        assert!(matches!(
            validate_new_plant("alice", &bad),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn rejects_missing_user() {
        assert!(validate_new_plant("", &input()).is_err());
    }
}
