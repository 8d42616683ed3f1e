//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Query parameters for `GET /plants/search` (`?q=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Query parameters for `GET /user/{user_id}/reminders` (`?lookahead_days=`).
///
/// Missing means the default 7-day window; the range is checked in the
/// reminder engine.
#[derive(Debug, Deserialize)]
pub struct ReminderQuery {
    pub lookahead_days: Option<i64>,
}
