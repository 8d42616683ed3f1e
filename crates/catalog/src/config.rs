/// Catalog client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Perenual API key (`PERENUAL_API_KEY`).
    pub perenual_api_key: Option<String>,
    /// PlantNet API key (`PLANTNET_API_KEY`).
    pub plantnet_api_key: Option<String>,
    /// Perenual base URL, without trailing slash.
    pub perenual_base_url: String,
    /// PlantNet base URL, without trailing slash.
    pub plantnet_base_url: String,
    /// PlantNet flora project used for identification.
    pub plantnet_project: String,
    /// Per-request timeout for outbound catalog calls.
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            perenual_api_key: None,
            plantnet_api_key: None,
            perenual_base_url: "https://perenual.com/api".to_string(),
            plantnet_base_url: "https://my-api.plantnet.org".to_string(),
            plantnet_project: "weurope".to_string(),
            timeout_secs: 15,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                       |
    /// |------------------------|-------------------------------|
    /// | `PERENUAL_API_KEY`     | unset                         |
    /// | `PLANTNET_API_KEY`     | unset                         |
    /// | `PERENUAL_BASE_URL`    | `https://perenual.com/api`    |
    /// | `PLANTNET_BASE_URL`    | `https://my-api.plantnet.org` |
    /// | `PLANTNET_PROJECT`     | `weurope`                     |
    /// | `CATALOG_TIMEOUT_SECS` | `15`                          |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout_secs: u64 = std::env::var("CATALOG_TIMEOUT_SECS")
            .map(|v| v.parse().expect("CATALOG_TIMEOUT_SECS must be a valid u64"))
            .unwrap_or(defaults.timeout_secs);

        Self {
            perenual_api_key: non_empty_var("PERENUAL_API_KEY"),
            plantnet_api_key: non_empty_var("PLANTNET_API_KEY"),
            perenual_base_url: non_empty_var("PERENUAL_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.perenual_base_url),
            plantnet_base_url: non_empty_var("PLANTNET_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.plantnet_base_url),
            plantnet_project: non_empty_var("PLANTNET_PROJECT")
                .unwrap_or(defaults.plantnet_project),
            timeout_secs,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
