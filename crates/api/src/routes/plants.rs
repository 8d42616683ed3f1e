//! Route definitions for the `/user/{user_id}/plants` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::plants;
use crate::state::AppState;

/// Routes mounted at `/user/{user_id}/plants`.
///
/// ```text
/// GET    /                          -> list_plants
/// POST   /                          -> add_plant
/// GET    /{plant_id}                -> get_plant
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(plants::list_plants).post(plants::add_plant))
        .route("/{plant_id}", get(plants::get_plant))
}
