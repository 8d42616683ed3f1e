//! HTTP client for the Perenual species API and the PlantNet
//! identification API, using [`reqwest`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;
use serde_json::Value;

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::models::{PlantCareInfo, PlantIdentification, PlantSearchResult};
use crate::parse;
use crate::query::{translate_query, validate_plant_id, validate_search_query};
use crate::PlantCatalog;

/// Production [`PlantCatalog`] backed by Perenual and PlantNet.
///
/// Holds one [`reqwest::Client`] for the lifetime of the process so
/// connections are pooled across requests.
pub struct PerenualPlantNetCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl PerenualPlantNetCatalog {
    /// Build the client with the configured per-request timeout.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self::with_client(client, config))
    }

    /// Create a catalog reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, config: CatalogConfig) -> Self {
        Self { client, config }
    }

    /// Raw `species-list` call. The query is sent as given.
    async fn species_list(&self, query: &str) -> Result<Vec<PlantSearchResult>, CatalogError> {
        let mut request = self
            .client
            .get(format!("{}/species-list", self.config.perenual_base_url))
            .query(&[("q", query), ("page", "1")]);
        if let Some(key) = &self.config.perenual_api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = Self::ensure_success(request.send().await?).await?;
        let body: Value = response.json().await?;
        Ok(parse::parse_species_list(&body))
    }

    /// Raw `species/details/{id}` call.
    ///
    /// Returns `None` when the upstream has no usable record: a 4xx status,
    /// an empty object or an error payload.
    async fn species_details(&self, plant_id: &str) -> Result<Option<PlantCareInfo>, CatalogError> {
        let mut request = self.client.get(format!(
            "{}/species/details/{}",
            self.config.perenual_base_url, plant_id
        ));
        if let Some(key) = &self.config.perenual_api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request.send().await?;
        if response.status().is_client_error() {
            tracing::debug!(plant_id, status = %response.status(), "No catalog details");
            return Ok(None);
        }

        let response = Self::ensure_success(response).await?;
        let body: Value = response.json().await?;
        if !parse::is_usable_details(&body) {
            tracing::warn!(plant_id, "Unusable catalog details payload");
            return Ok(None);
        }
        Ok(Some(parse::parse_species_details(plant_id, &body)))
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or a [`CatalogError::ApiError`]
    /// containing the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(CatalogError::ApiError {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl PlantCatalog for PerenualPlantNetCatalog {
    async fn search_by_query(&self, query: &str) -> Result<Vec<PlantSearchResult>, CatalogError> {
        let query = validate_search_query(query)?;
        let translated = translate_query(query);
        tracing::debug!(query, translated = %translated, "Searching catalog");

        let results = self.species_list(&translated).await?;
        tracing::info!(query = %translated, count = results.len(), "Catalog search finished");
        Ok(results)
    }

    async fn get_details_by_id(&self, plant_id: &str) -> Result<PlantCareInfo, CatalogError> {
        let plant_id = validate_plant_id(plant_id)?;

        if let Some(info) = self.species_details(plant_id).await? {
            return Ok(info);
        }

        let hits = self.species_list(&format!("id:{plant_id}")).await?;
        match hits.first() {
            Some(hit) => Ok(parse::fallback_care_info(plant_id, hit)),
            None => Err(CatalogError::NotFound(plant_id.to_string())),
        }
    }

    async fn identify_from_image(
        &self,
        image: Vec<u8>,
        content_type: &str,
    ) -> Result<PlantIdentification, CatalogError> {
        if image.is_empty() {
            return Err(CatalogError::InvalidRequest(
                "Image must not be empty".to_string(),
            ));
        }

        let part = Part::bytes(image)
            .file_name("plant.jpg")
            .mime_str(content_type)
            .map_err(|_| {
                CatalogError::InvalidRequest(format!("Unsupported content type: {content_type}"))
            })?;
        let form = Form::new()
            .part("images", part)
            .text("modifiers", r#"["crops","isolated"]"#)
            .text("plant-details", r#"["common_names"]"#);

        let mut request = self
            .client
            .post(format!(
                "{}/v2/identify/{}",
                self.config.plantnet_base_url, self.config.plantnet_project
            ))
            .multipart(form);
        if let Some(key) = &self.config.plantnet_api_key {
            request = request.query(&[("api-key", key.as_str())]);
        }

        let response = request.send().await?;
        // PlantNet answers 404 when no species matches the photo.
        if response.status() == StatusCode::NOT_FOUND {
            tracing::info!("No species matched the uploaded image");
            return Ok(PlantIdentification::default());
        }

        let response = Self::ensure_success(response).await?;
        let body: Value = response.json().await?;
        let identification = parse::parse_identification(&body);
        tracing::info!(
            suggestions = identification.suggestions.len(),
            identified_name = ?identification.identified_name,
            "Image identified",
        );
        Ok(identification)
    }
}
