//! Handlers for the `/user/{user_id}/reminders` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use plauntie_care::{CompletedReminder, ReminderEngine};
use plauntie_core::types::EntityId;
use plauntie_db::models::reminder::{CreateReminder, Reminder};

use crate::error::AppResult;
use crate::query::ReminderQuery;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/user/{user_id}/reminders?lookahead_days=
///
/// Pending reminders due within the lookahead window (default 7 days),
/// earliest first. Overdue reminders are always included.
pub async fn list_due_reminders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<ReminderQuery>,
) -> AppResult<Json<DataResponse<Vec<Reminder>>>> {
    let reminders =
        ReminderEngine::list_due_reminders(&state.pool, &user_id, params.lookahead_days, Utc::now())
            .await?;
    Ok(Json(DataResponse { data: reminders }))
}

/// POST /api/user/{user_id}/reminders
///
/// Schedule a one-off reminder. 409 if the plant already has a pending
/// reminder of the same type.
pub async fn create_reminder(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(input): Json<CreateReminder>,
) -> AppResult<(StatusCode, Json<DataResponse<Reminder>>)> {
    let reminder =
        ReminderEngine::create_reminder(&state.pool, &user_id, &input, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: reminder })))
}

/// POST /api/user/{user_id}/reminders/{reminder_id}/complete
///
/// Returns the completed reminder and, for recurring kinds, its successor.
/// A reminder that is unknown, belongs to someone else or is already
/// completed yields 404.
pub async fn complete_reminder(
    State(state): State<AppState>,
    Path((user_id, reminder_id)): Path<(String, EntityId)>,
) -> AppResult<Json<DataResponse<CompletedReminder>>> {
    let completed =
        ReminderEngine::complete_reminder(&state.pool, &user_id, reminder_id, Utc::now()).await?;
    Ok(Json(DataResponse { data: completed }))
}
