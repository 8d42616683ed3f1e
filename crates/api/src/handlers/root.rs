use axum::Json;
use serde::Serialize;

use crate::response::DataResponse;

/// Greeting payload for the API root.
#[derive(Debug, Serialize)]
pub struct Greeting {
    pub message: &'static str,
}

/// GET /api
pub async fn greeting() -> Json<DataResponse<Greeting>> {
    Json(DataResponse {
        data: Greeting {
            message: "Plauntie API - Your wise plant companion is ready to help!",
        },
    })
}
