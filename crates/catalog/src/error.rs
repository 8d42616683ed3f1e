use plauntie_core::error::CoreError;

/// Errors from the catalog lookup layer.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The upstream API returned a non-2xx status code.
    #[error("Catalog API error ({status}): {body}")]
    ApiError {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The upstream API has no record of the plant.
    #[error("Plant {0} not found in catalog")]
    NotFound(String),

    /// The request was rejected before reaching the upstream API.
    #[error("Invalid catalog request: {0}")]
    InvalidRequest(String),
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => CoreError::not_found("CatalogPlant", id),
            CatalogError::InvalidRequest(msg) => CoreError::Validation(msg),
            CatalogError::Request(_) | CatalogError::ApiError { .. } => {
                CoreError::UpstreamUnavailable(err.to_string())
            }
        }
    }
}
