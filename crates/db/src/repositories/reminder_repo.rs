//! Repository for the `reminders` table.

use plauntie_core::types::{EntityId, Timestamp};
use sqlx::{PgExecutor, PgPool};

use crate::models::reminder::{NewReminder, Reminder};

/// Column list for `reminders` queries.
const COLUMNS: &str = "\
    id, user_id, plant_id, plant_nickname, reminder_type, due_date, \
    completed, completed_at, created_at";

/// Provides data access for care reminders.
pub struct ReminderRepo;

impl ReminderRepo {
    /// Insert a pending reminder with a fresh id.
    ///
    /// Fails with a unique violation on `uq_reminders_pending_kind` if the
    /// plant already has a pending reminder of the same kind.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        input: &NewReminder,
        now: Timestamp,
    ) -> Result<Reminder, sqlx::Error> {
        let query = format!(
            "INSERT INTO reminders \
                 (id, user_id, plant_id, plant_nickname, reminder_type, due_date, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(EntityId::new_v4())
            .bind(&input.user_id)
            .bind(input.plant_id)
            .bind(&input.plant_nickname)
            .bind(input.kind.as_str())
            .bind(input.due_date)
            .bind(now)
            .fetch_one(executor)
            .await
    }

    /// List a user's pending reminders due on or before `horizon`,
    /// earliest first. Callers build `horizon` with
    /// `plauntie_core::reminder::due_horizon`.
    pub async fn list_due_for_user(
        pool: &PgPool,
        user_id: &str,
        horizon: Timestamp,
        limit: i64,
    ) -> Result<Vec<Reminder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reminders \
             WHERE user_id = $1 AND completed = false AND due_date <= $2 \
             ORDER BY due_date ASC, created_at ASC \
             LIMIT $3"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(user_id)
            .bind(horizon)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Transition a pending reminder to completed.
    ///
    /// The `completed = false` guard makes this the single point where a
    /// reminder can change state: of two concurrent callers only one gets
    /// the row back. Returns `None` if the reminder does not exist for the
    /// user or was already completed.
    pub async fn mark_completed<'e, E: PgExecutor<'e>>(
        executor: E,
        user_id: &str,
        id: EntityId,
        at: Timestamp,
    ) -> Result<Option<Reminder>, sqlx::Error> {
        let query = format!(
            "UPDATE reminders \
             SET completed = true, completed_at = $3 \
             WHERE id = $1 AND user_id = $2 AND completed = false \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(id)
            .bind(user_id)
            .bind(at)
            .fetch_optional(executor)
            .await
    }
}
