//! Handlers for the `/user/{user_id}/plants` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use plauntie_care::PlantRegistry;
use plauntie_core::types::EntityId;
use plauntie_db::models::owned_plant::{CreateOwnedPlant, OwnedPlant};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/user/{user_id}/plants
///
/// Adds the plant and schedules its first watering and fertilizing
/// reminders. Returns 201 with the stored plant.
pub async fn add_plant(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(input): Json<CreateOwnedPlant>,
) -> AppResult<(StatusCode, Json<DataResponse<OwnedPlant>>)> {
    let plant = PlantRegistry::add_plant(&state.pool, &user_id, &input, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: plant })))
}

/// GET /api/user/{user_id}/plants
pub async fn list_plants(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<DataResponse<Vec<OwnedPlant>>>> {
    let plants = PlantRegistry::list_plants(&state.pool, &user_id).await?;
    Ok(Json(DataResponse { data: plants }))
}

/// GET /api/user/{user_id}/plants/{plant_id}
pub async fn get_plant(
    State(state): State<AppState>,
    Path((user_id, plant_id)): Path<(String, EntityId)>,
) -> AppResult<Json<DataResponse<OwnedPlant>>> {
    let plant = PlantRegistry::get_plant(&state.pool, &user_id, plant_id).await?;
    Ok(Json(DataResponse { data: plant }))
}
