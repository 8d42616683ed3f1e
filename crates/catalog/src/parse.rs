//! Mapping of upstream JSON payloads onto catalog records.
//!
//! Upstream fields are loosely typed (missing, `null`, a string where a
//! list is expected), so parsing works on [`serde_json::Value`] and never
//! fails; absent data becomes `None` or an empty list.

use serde_json::Value;

use crate::models::{PlantCareInfo, PlantIdentification, PlantSearchResult, SpeciesSuggestion};

/// Placeholder for care fields the upstream record leaves empty.
pub const UNAVAILABLE: &str = "Information unavailable";

// ---------------------------------------------------------------------------
// Perenual
// ---------------------------------------------------------------------------

/// Parse a Perenual `species-list` response.
pub fn parse_species_list(body: &Value) -> Vec<PlantSearchResult> {
    body.get("data")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(parse_species_item).collect())
        .unwrap_or_default()
}

fn parse_species_item(item: &Value) -> PlantSearchResult {
    PlantSearchResult {
        id: id_string(item.get("id")),
        name: str_field(item, "common_name").unwrap_or_default(),
        scientific_name: first_string(item.get("scientific_name")).unwrap_or_default(),
        common_names: string_list(item.get("other_name")),
        image_url: item
            .get("default_image")
            .and_then(|img| img.get("medium_url"))
            .and_then(Value::as_str)
            .map(str::to_string),
        description: str_field(item, "description"),
        care_level: str_field(item, "care_level"),
    }
}

/// Whether a Perenual details response carries a usable record.
pub fn is_usable_details(body: &Value) -> bool {
    match body.as_object() {
        Some(obj) => !obj.is_empty() && !obj.contains_key("error"),
        None => false,
    }
}

/// Parse a Perenual `species/details/{id}` response.
pub fn parse_species_details(plant_id: &str, body: &Value) -> PlantCareInfo {
    let temperature = body.get("hardiness").filter(|h| h.is_object()).map(|h| {
        format!(
            "{} - {}°C",
            scalar_string(h.get("min")).unwrap_or_else(|| "N/A".to_string()),
            scalar_string(h.get("max")).unwrap_or_else(|| "N/A".to_string()),
        )
    });

    PlantCareInfo {
        plant_id: plant_id.to_string(),
        name: str_field(body, "common_name").unwrap_or_else(|| "Unknown".to_string()),
        scientific_name: first_string(body.get("scientific_name"))
            .unwrap_or_else(|| "Unknown".to_string()),
        watering: Some(str_field(body, "watering").unwrap_or_else(unavailable)),
        sunlight: Some(first_string(body.get("sunlight")).unwrap_or_else(unavailable)),
        temperature: Some(temperature.unwrap_or_else(unavailable)),
        humidity: Some(str_field(body, "humidity").unwrap_or_else(unavailable)),
        fertilizer: Some(str_field(body, "fertilizer").unwrap_or_else(unavailable)),
        repotting: Some(str_field(body, "repotting").unwrap_or_else(unavailable)),
        common_problems: string_list(body.get("problem")),
        care_tips: string_list(body.get("care_guides")),
    }
}

/// Generic care guidance built from a search hit when no details exist.
pub fn fallback_care_info(plant_id: &str, hit: &PlantSearchResult) -> PlantCareInfo {
    PlantCareInfo {
        plant_id: plant_id.to_string(),
        name: hit.name.clone(),
        scientific_name: hit.scientific_name.clone(),
        watering: Some("Water regularly once the topsoil dries out".to_string()),
        sunlight: Some("Bright, indirect light".to_string()),
        temperature: Some("18-24°C".to_string()),
        humidity: Some("Moderate humidity, 40-60%".to_string()),
        fertilizer: Some("Feed every 2-4 weeks during the growing season".to_string()),
        repotting: Some("Repot every 1-2 years in spring".to_string()),
        common_problems: vec![
            "Overwatering".to_string(),
            "Insufficient light".to_string(),
            "Pests".to_string(),
        ],
        care_tips: vec![
            "Check soil moisture before watering".to_string(),
            "Provide good lighting".to_string(),
            "Inspect the plant regularly for pests".to_string(),
            "Keep the temperature stable".to_string(),
        ],
    }
}

// ---------------------------------------------------------------------------
// PlantNet
// ---------------------------------------------------------------------------

/// Parse a PlantNet `identify` response, keeping upstream ranking.
pub fn parse_identification(body: &Value) -> PlantIdentification {
    let results = body
        .get("results")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut best: Option<(f64, String)> = None;
    let mut suggestions = Vec::with_capacity(results.len());

    for result in results {
        let score = result.get("score").and_then(Value::as_f64).unwrap_or(0.0);
        let species = result.get("species").unwrap_or(&Value::Null);
        let name = str_field(species, "scientificNameWithoutAuthor").unwrap_or_default();

        if best.as_ref().map_or(score > 0.0, |(top, _)| score > *top) {
            best = Some((score, name.clone()));
        }

        suggestions.push(SpeciesSuggestion {
            name,
            common_names: string_list(species.get("commonNames")),
            confidence: score,
            family: species
                .get("family")
                .map(|f| str_field(f, "scientificNameWithoutAuthor").unwrap_or_default())
                .unwrap_or_default(),
        });
    }

    let (confidence, identified_name) = match best {
        Some((score, name)) => (score, Some(name)),
        None => (0.0, None),
    };

    PlantIdentification {
        suggestions,
        confidence,
        identified_name,
    }
}

// ---------------------------------------------------------------------------
// Value helpers
// ---------------------------------------------------------------------------

fn unavailable() -> String {
    UNAVAILABLE.to_string()
}

/// A non-empty string field.
fn str_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Ids arrive as numbers from Perenual; accept strings too.
fn id_string(value: Option<&Value>) -> String {
    scalar_string(value).unwrap_or_default()
}

fn scalar_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// First element of a string list, or the value itself if it is a string.
fn first_string(value: Option<&Value>) -> Option<String> {
    string_list(value).into_iter().next()
}

/// A list of strings. Accepts a bare string, an array of strings, or an
/// array of `{ "value": ... }` objects; anything else is empty.
fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.clone()),
                Value::Object(_) => item.get("value").and_then(Value::as_str).map(str::to_string),
                _ => None,
            })
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}
