//! Repository for the `owned_plants` table.

use plauntie_core::reminder::ReminderKind;
use plauntie_core::types::{EntityId, Timestamp};
use sqlx::{PgExecutor, PgPool};

use crate::models::owned_plant::{CreateOwnedPlant, OwnedPlant};

/// Column list for `owned_plants` queries.
const COLUMNS: &str = "\
    id, user_id, plant_id, nickname, plant_name, scientific_name, date_added, \
    last_watered, last_fertilized, last_repotted, \
    watering_frequency_days, fertilizing_frequency_days, notes, image_url";

/// Provides data access for a user's plant collection.
pub struct OwnedPlantRepo;

impl OwnedPlantRepo {
    /// Insert a new plant with a fresh id, returning the created row.
    ///
    /// Cadence defaults are applied from the DTO; all `last_*` columns start
    /// unset.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: &str,
        input: &CreateOwnedPlant,
        now: Timestamp,
    ) -> Result<OwnedPlant, sqlx::Error> {
        let cadence = input.cadence();
        let query = format!(
            "INSERT INTO owned_plants \
                 (id, user_id, plant_id, nickname, plant_name, scientific_name, date_added, \
                  watering_frequency_days, fertilizing_frequency_days, notes, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, OwnedPlant>(&query)
            .bind(EntityId::new_v4())
            .bind(user_id)
            .bind(&input.plant_id)
            .bind(&input.nickname)
            .bind(&input.plant_name)
            .bind(&input.scientific_name)
            .bind(now)
            .bind(cadence.watering_days)
            .bind(cadence.fertilizing_days)
            .bind(&input.notes)
            .bind(&input.image_url)
            .fetch_one(executor)
            .await
    }

    /// Find a plant by id regardless of owner.
    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: EntityId,
    ) -> Result<Option<OwnedPlant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owned_plants WHERE id = $1");
        sqlx::query_as::<_, OwnedPlant>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a plant by id, scoped to its owner.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: &str,
        id: EntityId,
    ) -> Result<Option<OwnedPlant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM owned_plants WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, OwnedPlant>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's plants in the order they were added.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: &str,
        limit: i64,
    ) -> Result<Vec<OwnedPlant>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM owned_plants \
             WHERE user_id = $1 \
             ORDER BY date_added ASC, id ASC \
             LIMIT $2"
        );
        sqlx::query_as::<_, OwnedPlant>(&query)
            .bind(user_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Set the `last_*` timestamp matching `kind`.
    ///
    /// Returns `true` if the plant exists and was updated, `false` otherwise.
    pub async fn record_care_action<'e, E: PgExecutor<'e>>(
        executor: E,
        id: EntityId,
        kind: ReminderKind,
        at: Timestamp,
    ) -> Result<bool, sqlx::Error> {
        let column = match kind {
            ReminderKind::Watering => "last_watered",
            ReminderKind::Fertilizing => "last_fertilized",
            ReminderKind::Repotting => "last_repotted",
        };
        let query = format!("UPDATE owned_plants SET {column} = $2 WHERE id = $1");
        let result = sqlx::query(&query)
            .bind(id)
            .bind(at)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
