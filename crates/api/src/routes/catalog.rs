//! Route definitions for the `/plants` catalog resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/plants`. Photo uploads may be up to
/// `max_upload_bytes`; other routes keep axum's default body limit.
///
/// ```text
/// GET    /search?q=                 -> search_plants
/// POST   /identify                  -> identify_plant
/// GET    /{plant_id}/care           -> get_care_info
/// ```
pub fn router(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/search", get(catalog::search_plants))
        .route(
            "/identify",
            post(catalog::identify_plant).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/{plant_id}/care", get(catalog::get_care_info))
}
