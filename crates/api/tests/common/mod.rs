#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use plauntie_catalog::{
    CatalogError, PlantCareInfo, PlantCatalog, PlantIdentification, PlantSearchResult,
    SpeciesSuggestion,
};
use sqlx::PgPool;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use plauntie_api::config::ServerConfig;
use plauntie_api::routes;
use plauntie_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        max_upload_bytes: plauntie_api::config::DEFAULT_MAX_UPLOAD_BYTES,
    }
}

/// In-memory catalog with one known species (`"1"`, Monstera) and a
/// switch to simulate an upstream outage.
pub struct StubCatalog {
    pub unavailable: bool,
}

fn monstera() -> PlantSearchResult {
    PlantSearchResult {
        id: "1".to_string(),
        name: "Swiss cheese plant".to_string(),
        scientific_name: "Monstera deliciosa".to_string(),
        common_names: vec!["Monstera".to_string()],
        image_url: None,
        description: None,
        care_level: Some("Low".to_string()),
    }
}

impl StubCatalog {
    fn check(&self) -> Result<(), CatalogError> {
        if self.unavailable {
            return Err(CatalogError::ApiError {
                status: 503,
                body: "maintenance".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PlantCatalog for StubCatalog {
    async fn search_by_query(&self, query: &str) -> Result<Vec<PlantSearchResult>, CatalogError> {
        let query = plauntie_catalog::query::validate_search_query(query)?;
        self.check()?;
        let translated = plauntie_catalog::query::translate_query(query).to_lowercase();
        if "monstera swiss cheese plant".contains(&translated) {
            Ok(vec![monstera()])
        } else {
            Ok(Vec::new())
        }
    }

    async fn get_details_by_id(&self, plant_id: &str) -> Result<PlantCareInfo, CatalogError> {
        let plant_id = plauntie_catalog::query::validate_plant_id(plant_id)?;
        self.check()?;
        if plant_id != "1" {
            return Err(CatalogError::NotFound(plant_id.to_string()));
        }
        Ok(plauntie_catalog::parse::fallback_care_info(plant_id, &monstera()))
    }

    async fn identify_from_image(
        &self,
        _image: Vec<u8>,
        _content_type: &str,
    ) -> Result<PlantIdentification, CatalogError> {
        self.check()?;
        Ok(PlantIdentification {
            suggestions: vec![SpeciesSuggestion {
                name: "Monstera deliciosa".to_string(),
                common_names: vec!["Swiss cheese plant".to_string()],
                confidence: 0.93,
                family: "Araceae".to_string(),
            }],
            confidence: 0.93,
            identified_name: Some("Monstera deliciosa".to_string()),
        })
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a working stub catalog.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_catalog(pool, StubCatalog { unavailable: false })
}

/// Like [`build_test_app`] but with a caller-supplied catalog.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app_with_catalog(pool: PgPool, catalog: impl PlantCatalog + 'static) -> Router {
    let config = test_config();
    let api = routes::api_routes(&config);
    let state = AppState {
        pool,
        config: Arc::new(config),
        catalog: Arc::new(catalog),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:3000".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .nest("/api", api)
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Send a GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request without a body.
pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a single-file multipart upload.
pub async fn post_file(
    app: Router,
    uri: &str,
    field: &str,
    content_type: &str,
    bytes: &[u8],
) -> Response {
    let boundary = "plauntie-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"upload\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
