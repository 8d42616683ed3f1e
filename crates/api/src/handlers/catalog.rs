//! Handlers for the `/plants` catalog resource.
//!
//! These proxy the external plant catalog; nothing here touches the
//! database.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use plauntie_catalog::{PlantCareInfo, PlantIdentification, PlantSearchResult};

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Multipart field carrying the photo.
const IMAGE_FIELD: &str = "file";

/// GET /api/plants/search?q=
pub async fn search_plants(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<DataResponse<Vec<PlantSearchResult>>>> {
    let results = state.catalog.search_by_query(&params.q).await?;
    Ok(Json(DataResponse { data: results }))
}

/// GET /api/plants/{plant_id}/care
///
/// Falls back to generic guidance when the catalog has a search hit but no
/// detailed record; 404 when it has neither.
pub async fn get_care_info(
    State(state): State<AppState>,
    Path(plant_id): Path<String>,
) -> AppResult<Json<DataResponse<PlantCareInfo>>> {
    let info = state.catalog.get_details_by_id(&plant_id).await?;
    Ok(Json(DataResponse { data: info }))
}

/// POST /api/plants/identify
///
/// Expects a multipart upload with an image in the `file` field. Other
/// fields are ignored.
pub async fn identify_plant(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<PlantIdentification>>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(upload_error)?
    {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            return Err(AppError::BadRequest("File must be an image".into()));
        }

        let data = field
            .bytes()
            .await
            .map_err(upload_error)?;
        if data.is_empty() {
            return Err(AppError::BadRequest("Image file is empty".into()));
        }

        tracing::debug!(content_type = %content_type, size = data.len(), "Identifying uploaded image");
        let identification = state
            .catalog
            .identify_from_image(data.to_vec(), &content_type)
            .await?;
        return Ok(Json(DataResponse {
            data: identification,
        }));
    }

    Err(AppError::BadRequest(format!(
        "Missing multipart field '{IMAGE_FIELD}'"
    )))
}

/// Oversized uploads keep their 413; any other multipart failure is a 400.
fn upload_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::BadRequest(err.body_text())
    }
}
