use std::sync::Arc;

use plauntie_catalog::PlantCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: plauntie_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Plant catalog lookup, built once at startup.
    pub catalog: Arc<dyn PlantCatalog>,
}
