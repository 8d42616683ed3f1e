//! Route definitions for the `/user/{user_id}/reminders` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reminders;
use crate::state::AppState;

/// Routes mounted at `/user/{user_id}/reminders`.
///
/// ```text
/// GET    /?lookahead_days=          -> list_due_reminders
/// POST   /                          -> create_reminder
/// POST   /{reminder_id}/complete    -> complete_reminder
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(reminders::list_due_reminders).post(reminders::create_reminder),
        )
        .route("/{reminder_id}/complete", post(reminders::complete_reminder))
}
