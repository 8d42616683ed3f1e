//! Plant catalog lookup: species search, care details and photo identification.
//!
//! The [`PlantCatalog`] trait is the seam the API depends on;
//! [`PerenualPlantNetCatalog`] is the production implementation backed by
//! the Perenual species API and the PlantNet identification API.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod parse;
pub mod query;

use async_trait::async_trait;

pub use client::PerenualPlantNetCatalog;
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use models::{PlantCareInfo, PlantIdentification, PlantSearchResult, SpeciesSuggestion};

/// External plant reference data. Stateless from the caller's point of view.
#[async_trait]
pub trait PlantCatalog: Send + Sync {
    /// Search species by free-text name.
    async fn search_by_query(&self, query: &str) -> Result<Vec<PlantSearchResult>, CatalogError>;

    /// Care details for a catalog plant id.
    async fn get_details_by_id(&self, plant_id: &str) -> Result<PlantCareInfo, CatalogError>;

    /// Ranked species guesses for a photo.
    async fn identify_from_image(
        &self,
        image: Vec<u8>,
        content_type: &str,
    ) -> Result<PlantIdentification, CatalogError>;
}
