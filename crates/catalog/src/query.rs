//! Search query validation and name translation.

use crate::error::CatalogError;

/// Minimum number of characters in a search query.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Russian plant names and their English equivalents, checked in order.
const TRANSLATIONS: &[(&str, &str)] = &[
    ("роза", "rose"),
    ("розы", "rose"),
    ("фиалка", "violet"),
    ("фиалки", "violet"),
    ("кактус", "cactus"),
    ("кактусы", "cactus"),
    ("фикус", "ficus"),
    ("фикусы", "ficus"),
    ("орхидея", "orchid"),
    ("орхидеи", "orchid"),
    ("тюльпан", "tulip"),
    ("тюльпаны", "tulip"),
    ("лилия", "lily"),
    ("лилии", "lily"),
    ("ромашка", "daisy"),
    ("ромашки", "daisy"),
    ("подсолнух", "sunflower"),
    ("подсолнухи", "sunflower"),
    ("пион", "peony"),
    ("пионы", "peony"),
    ("лаванда", "lavender"),
    ("мята", "mint"),
    ("базилик", "basil"),
    ("петрушка", "parsley"),
    ("укроп", "dill"),
    ("алоэ", "aloe"),
    ("каланхоэ", "kalanchoe"),
    ("герань", "geranium"),
    ("бегония", "begonia"),
    ("драцена", "dracaena"),
    ("пальма", "palm"),
    ("плющ", "ivy"),
    ("папоротник", "fern"),
    ("мох", "moss"),
    ("суккулент", "succulent"),
    ("суккуленты", "succulent"),
    ("денежное дерево", "jade plant"),
    ("фиалка узамбарская", "african violet"),
    ("комнатная роза", "indoor rose"),
    ("цветок", "flower"),
    ("цветы", "flower"),
    ("растение", "plant"),
    ("растения", "plant"),
    ("трава", "grass"),
    ("дерево", "tree"),
    ("куст", "bush"),
];

/// Reject queries that are blank or shorter than [`MIN_QUERY_LENGTH`]
/// characters. Returns the trimmed query.
pub fn validate_search_query(query: &str) -> Result<&str, CatalogError> {
    let trimmed = query.trim();
    if trimmed.chars().count() < MIN_QUERY_LENGTH {
        return Err(CatalogError::InvalidRequest(format!(
            "Query must be at least {MIN_QUERY_LENGTH} characters long"
        )));
    }
    Ok(trimmed)
}

/// Catalog ids are path segments of the upstream URL: ASCII letters,
/// digits, `-` and `_` only. Returns the trimmed id.
pub fn validate_plant_id(plant_id: &str) -> Result<&str, CatalogError> {
    let trimmed = plant_id.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::InvalidRequest(
            "plant_id must not be empty".to_string(),
        ));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CatalogError::InvalidRequest(format!(
            "Invalid plant_id: {trimmed}"
        )));
    }
    Ok(trimmed)
}

/// Translate a Russian plant name to English.
///
/// An exact (case-insensitive) match wins; otherwise the first entry that
/// contains the query or is contained in it. Unknown queries pass through
/// unchanged.
pub fn translate_query(query: &str) -> String {
    let needle = query.trim().to_lowercase();

    if let Some((_, english)) = TRANSLATIONS.iter().find(|(russian, _)| *russian == needle) {
        return (*english).to_string();
    }

    TRANSLATIONS
        .iter()
        .find(|(russian, _)| russian.contains(needle.as_str()) || needle.contains(russian))
        .map(|(_, english)| (*english).to_string())
        .unwrap_or_else(|| query.to_string())
}
