//! Catalog records returned to API clients.

use serde::{Deserialize, Serialize};

/// One candidate from a species search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantSearchResult {
    pub id: String,
    pub name: String,
    pub scientific_name: String,
    #[serde(default)]
    pub common_names: Vec<String>,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub care_level: Option<String>,
}

/// Care guidance for a catalog species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantCareInfo {
    pub plant_id: String,
    pub name: String,
    pub scientific_name: String,
    pub watering: Option<String>,
    pub sunlight: Option<String>,
    pub temperature: Option<String>,
    pub humidity: Option<String>,
    pub fertilizer: Option<String>,
    pub repotting: Option<String>,
    #[serde(default)]
    pub common_problems: Vec<String>,
    #[serde(default)]
    pub care_tips: Vec<String>,
}

/// A single species guess from photo identification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeciesSuggestion {
    pub name: String,
    #[serde(default)]
    pub common_names: Vec<String>,
    pub confidence: f64,
    pub family: String,
}

/// Ranked species guesses for a photo, in upstream order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantIdentification {
    #[serde(default)]
    pub suggestions: Vec<SpeciesSuggestion>,
    /// Score of the best suggestion, `0.0` when nothing matched.
    pub confidence: f64,
    /// Scientific name of the best suggestion.
    pub identified_name: Option<String>,
}
