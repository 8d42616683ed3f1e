//! Reminder entity model and DTOs.

use plauntie_core::reminder::ReminderKind;
use plauntie_core::types::{EntityId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reminders` table.
///
/// `reminder_type` is stored as text and decoded into [`ReminderKind`];
/// an unknown value fails the row decode instead of being ignored.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reminder {
    pub id: EntityId,
    pub user_id: UserId,
    pub plant_id: EntityId,
    pub plant_nickname: String,
    #[sqlx(rename = "reminder_type", try_from = "String")]
    #[serde(rename = "reminder_type")]
    pub kind: ReminderKind,
    pub due_date: Timestamp,
    pub completed: bool,
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Values for inserting one reminder.
#[derive(Debug, Clone)]
pub struct NewReminder {
    pub user_id: UserId,
    pub plant_id: EntityId,
    pub plant_nickname: String,
    pub kind: ReminderKind,
    pub due_date: Timestamp,
}

/// DTO for manually scheduling a one-off reminder.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReminder {
    pub plant_id: EntityId,
    #[serde(rename = "reminder_type")]
    pub kind: ReminderKind,
    pub due_date: Timestamp,
}
