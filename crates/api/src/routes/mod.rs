pub mod catalog;
pub mod health;
pub mod plants;
pub mod reminders;

use axum::routing::get;
use axum::Router;

use crate::config::ServerConfig;
use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                                greeting (GET)
///
/// /plants/search                                   catalog search (GET ?q=)
/// /plants/identify                                 photo identification (POST multipart)
/// /plants/{plant_id}/care                          catalog care details (GET)
///
/// /user/{user_id}/plants                           list, add
/// /user/{user_id}/plants/{plant_id}                get
///
/// /user/{user_id}/reminders                        list due (GET ?lookahead_days=), create
/// /user/{user_id}/reminders/{reminder_id}/complete complete (POST)
/// ```
pub fn api_routes(config: &ServerConfig) -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root::greeting))
        // External plant catalog (search, care details, identification).
        .nest("/plants", catalog::router(config.max_upload_bytes))
        // A user's owned plants.
        .nest("/user/{user_id}/plants", plants::router())
        // A user's care reminders.
        .nest("/user/{user_id}/reminders", reminders::router())
}
