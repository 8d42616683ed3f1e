//! Reminder engine.
//!
//! Reminders move `pending -> completed` exactly once. Completing a
//! watering or fertilizing reminder stamps the plant and schedules the next
//! occurrence from the plant's current cadence; repotting reminders are
//! one-off and have no successor.

use plauntie_core::error::CoreError;
use plauntie_core::plant::validate_user_id;
use plauntie_core::reminder::{due_horizon, initial_schedule, next_due_date, resolve_lookahead_days};
use plauntie_core::types::{EntityId, Timestamp};
use plauntie_db::models::owned_plant::OwnedPlant;
use plauntie_db::models::reminder::{CreateReminder, NewReminder, Reminder};
use plauntie_db::repositories::{OwnedPlantRepo, ReminderRepo};
use serde::Serialize;
use sqlx::{PgConnection, PgPool};

use crate::error::{CareError, CareResult};
use crate::registry::PlantRegistry;

/// Maximum number of reminders returned by a single listing.
pub const MAX_REMINDERS_PER_LIST: i64 = 1000;

/// Unique index guarding one pending reminder per plant and kind.
const PENDING_KIND_CONSTRAINT: &str = "uq_reminders_pending_kind";

/// Outcome of completing a reminder.
#[derive(Debug, Clone, Serialize)]
pub struct CompletedReminder {
    /// The reminder, now marked completed.
    pub reminder: Reminder,
    /// The next occurrence, if the kind recurs and the plant still exists.
    pub next_reminder: Option<Reminder>,
}

/// Creates, lists and completes care reminders.
pub struct ReminderEngine;

impl ReminderEngine {
    /// Create the watering and fertilizing reminders for a newly added plant.
    ///
    /// Runs on the caller's connection so the batch commits or rolls back
    /// together with the plant insert.
    pub async fn schedule_initial_reminders(
        conn: &mut PgConnection,
        plant: &OwnedPlant,
        now: Timestamp,
    ) -> CareResult<Vec<Reminder>> {
        let mut created = Vec::with_capacity(2);
        for (kind, due_date) in initial_schedule(&plant.cadence(), now) {
            let input = NewReminder {
                user_id: plant.user_id.clone(),
                plant_id: plant.id,
                plant_nickname: plant.nickname.clone(),
                kind,
                due_date,
            };
            created.push(ReminderRepo::create(&mut *conn, &input, now).await?);
        }
        Ok(created)
    }

    /// Pending reminders of a user due within `lookahead_days` of `now`,
    /// earliest first. `None` uses the default 7-day window.
    pub async fn list_due_reminders(
        pool: &PgPool,
        user_id: &str,
        lookahead_days: Option<i64>,
        now: Timestamp,
    ) -> CareResult<Vec<Reminder>> {
        validate_user_id(user_id)?;
        let days = resolve_lookahead_days(lookahead_days)?;
        let horizon = due_horizon(now, days);
        let reminders =
            ReminderRepo::list_due_for_user(pool, user_id, horizon, MAX_REMINDERS_PER_LIST)
                .await?;
        Ok(reminders)
    }

    /// Complete a pending reminder and schedule its successor.
    ///
    /// Unknown ids, other users' reminders and already completed reminders
    /// all yield `NotFound` without touching any row. A missing plant only
    /// skips the plant update and the successor.
    pub async fn complete_reminder(
        pool: &PgPool,
        user_id: &str,
        reminder_id: EntityId,
        now: Timestamp,
    ) -> CareResult<CompletedReminder> {
        let mut tx = pool.begin().await?;

        let Some(reminder) = ReminderRepo::mark_completed(&mut *tx, user_id, reminder_id, now).await?
        else {
            return Err(CoreError::not_found("Reminder", reminder_id).into());
        };

        PlantRegistry::record_care_action(&mut *tx, reminder.plant_id, reminder.kind, now).await?;

        let next_reminder = match OwnedPlantRepo::find_by_id(&mut *tx, reminder.plant_id).await? {
            Some(plant) => Self::schedule_successor(&mut *tx, &reminder, &plant, now).await?,
            None => None,
        };

        tx.commit().await?;

        tracing::info!(
            user_id,
            reminder_id = %reminder.id,
            kind = %reminder.kind,
            next_due = ?next_reminder.as_ref().map(|r| r.due_date),
            "Reminder completed",
        );

        Ok(CompletedReminder {
            reminder,
            next_reminder,
        })
    }

    /// Manually schedule a one-off reminder for one of the user's plants.
    ///
    /// This is how repotting reminders come to exist. Fails with `Conflict`
    /// if the plant already has a pending reminder of the same kind.
    pub async fn create_reminder(
        pool: &PgPool,
        user_id: &str,
        input: &CreateReminder,
        now: Timestamp,
    ) -> CareResult<Reminder> {
        let plant = PlantRegistry::get_plant(pool, user_id, input.plant_id).await?;

        let new = NewReminder {
            user_id: plant.user_id.clone(),
            plant_id: plant.id,
            plant_nickname: plant.nickname.clone(),
            kind: input.kind,
            due_date: input.due_date,
        };

        match ReminderRepo::create(pool, &new, now).await {
            Ok(reminder) => {
                tracing::info!(
                    user_id,
                    reminder_id = %reminder.id,
                    kind = %reminder.kind,
                    "Reminder scheduled",
                );
                Ok(reminder)
            }
            Err(e) if is_pending_kind_violation(&e) => Err(CoreError::Conflict(format!(
                "Plant {} already has a pending {} reminder",
                plant.id, input.kind
            ))
            .into()),
            Err(e) => Err(CareError::Database(e)),
        }
    }

    /// Insert the next occurrence of a completed reminder, if its kind recurs.
    async fn schedule_successor(
        conn: &mut PgConnection,
        completed: &Reminder,
        plant: &OwnedPlant,
        now: Timestamp,
    ) -> CareResult<Option<Reminder>> {
        let Some(due_date) = next_due_date(completed.kind, &plant.cadence(), now) else {
            return Ok(None);
        };
        let input = NewReminder {
            user_id: completed.user_id.clone(),
            plant_id: completed.plant_id,
            plant_nickname: completed.plant_nickname.clone(),
            kind: completed.kind,
            due_date,
        };
        let reminder = ReminderRepo::create(conn, &input, now).await?;
        Ok(Some(reminder))
    }
}

fn is_pending_kind_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .and_then(|db_err| db_err.constraint())
        == Some(PENDING_KIND_CONSTRAINT)
}
